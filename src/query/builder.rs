//! Query builder: folds options into a validated query string.

use crate::error::Error;
use crate::query::opt::{Direction, Operator, Opt};

/// The maximum value accepted by [`Opt::Limit`]. Exceeding it (or passing
/// zero) is a build-time [`Error::OutOfRange`], not a network error.
pub const MAX_LIMIT: u32 = 50;

/// The maximum value accepted by [`Opt::Offset`], matching the upstream
/// scroll bound.
pub const MAX_OFFSET: u32 = 10_000;

/// An ordered accumulation of applied options, reduced to a canonical
/// query-string encoding.
///
/// Built with [`Query::build`]; rendered with [`Query::encode`]. Validation
/// is entirely local: a `Query` that builds successfully is guaranteed to
/// encode without error, and an invalid option set fails before any network
/// request is issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    fields: Option<Vec<String>>,
    filters: Vec<Filter>,
    order: Option<(String, Direction)>,
    limit: Option<u32>,
    offset: Option<u32>,
    search: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    field: String,
    op: Operator,
    value: String,
}

impl Query {
    /// Folds a sequence of options into a validated query.
    ///
    /// Filters accumulate in insertion order and are never deduplicated;
    /// duplicates pass through to the upstream. Fields, order, limit,
    /// offset, and search are exclusive: repeating one overwrites the
    /// earlier value (last wins).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if a limit is outside `1..=MAX_LIMIT`
    /// or an offset exceeds `MAX_OFFSET`. Every range violation maps to
    /// this one sentinel.
    pub fn build(opts: &[Opt]) -> Result<Self, Error> {
        let mut query = Self::default();
        for opt in opts {
            query.apply(opt)?;
        }
        Ok(query)
    }

    fn apply(&mut self, opt: &Opt) -> Result<(), Error> {
        match opt {
            Opt::Fields(names) => {
                self.fields = Some(names.clone());
            }
            Opt::Filter { field, op, value } => {
                self.filters.push(Filter {
                    field: field.clone(),
                    op: *op,
                    value: value.clone(),
                });
            }
            Opt::Order { field, direction } => {
                self.order = Some((field.clone(), *direction));
            }
            Opt::Limit(n) => {
                if !(1..=MAX_LIMIT).contains(n) {
                    return Err(Error::OutOfRange);
                }
                self.limit = Some(*n);
            }
            Opt::Offset(n) => {
                if *n > MAX_OFFSET {
                    return Err(Error::OutOfRange);
                }
                self.offset = Some(*n);
            }
            Opt::Search(term) => {
                self.search = Some(term.clone());
            }
        }
        Ok(())
    }

    /// Overwrites the search term. Used by the search accessor so the
    /// explicit term always wins over an `Opt::Search` in the option list.
    pub(crate) fn set_search(&mut self, term: &str) {
        self.search = Some(term.to_string());
    }

    /// Renders the query as a canonical query string.
    ///
    /// Returns the empty string when no options were applied, otherwise a
    /// `?`-prefixed `&`-joined parameter list. Filter values and search
    /// terms are percent-encoded; field lists are comma-joined verbatim.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if let Some(fields) = &self.fields {
            pairs.push(format!("fields={}", fields.join(",")));
        }
        for filter in &self.filters {
            pairs.push(format!(
                "filter[{}][{}]={}",
                filter.field,
                filter.op.as_token(),
                urlencoding::encode(&filter.value)
            ));
        }
        if let Some((field, direction)) = &self.order {
            pairs.push(format!("order={}:{}", field, direction.as_token()));
        }
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={limit}"));
        }
        if let Some(offset) = self.offset {
            pairs.push(format!("offset={offset}"));
        }
        if let Some(term) = &self.search {
            pairs.push(format!("search={}", urlencoding::encode(term)));
        }

        if pairs.is_empty() {
            String::new()
        } else {
            format!("?{}", pairs.join("&"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_options_encode_to_empty_string() {
        let query = Query::build(&[]).unwrap();
        assert_eq!(query.encode(), "");
    }

    #[test]
    fn test_fields_are_comma_joined() {
        let query = Query::build(&[Opt::fields(["name", "slug", "url"])]).unwrap();
        assert_eq!(query.encode(), "?fields=name,slug,url");
    }

    #[test]
    fn test_filter_encoding() {
        let query =
            Query::build(&[Opt::filter("popularity", Operator::GreaterThan, "75")]).unwrap();
        assert_eq!(query.encode(), "?filter[popularity][gt]=75");
    }

    #[test]
    fn test_filters_accumulate_in_insertion_order() {
        let query = Query::build(&[
            Opt::filter("rating", Operator::GreaterThan, "50"),
            Opt::filter("rating", Operator::LessThan, "90"),
            Opt::filter("genres", Operator::In, "12"),
        ])
        .unwrap();
        assert_eq!(
            query.encode(),
            "?filter[rating][gt]=50&filter[rating][lt]=90&filter[genres][in]=12"
        );
    }

    #[test]
    fn test_duplicate_filters_are_not_deduplicated() {
        let query = Query::build(&[
            Opt::filter("rating", Operator::Equals, "80"),
            Opt::filter("rating", Operator::Equals, "80"),
        ])
        .unwrap();
        assert_eq!(
            query.encode(),
            "?filter[rating][eq]=80&filter[rating][eq]=80"
        );
    }

    #[test]
    fn test_order_encoding() {
        let query = Query::build(&[Opt::order("release_date", Direction::Descending)]).unwrap();
        assert_eq!(query.encode(), "?order=release_date:desc");
    }

    #[test]
    fn test_limit_bounds() {
        assert!(matches!(
            Query::build(&[Opt::limit(0)]),
            Err(Error::OutOfRange)
        ));
        assert!(matches!(
            Query::build(&[Opt::limit(MAX_LIMIT + 1)]),
            Err(Error::OutOfRange)
        ));
        assert!(Query::build(&[Opt::limit(1)]).is_ok());
        assert!(Query::build(&[Opt::limit(MAX_LIMIT)]).is_ok());
    }

    #[test]
    fn test_offset_bounds() {
        assert!(matches!(
            Query::build(&[Opt::offset(99_999)]),
            Err(Error::OutOfRange)
        ));
        assert!(Query::build(&[Opt::offset(0)]).is_ok());
        assert!(Query::build(&[Opt::offset(MAX_OFFSET)]).is_ok());
    }

    #[test]
    fn test_invalid_option_fails_whole_build() {
        // A bad limit poisons the build even when earlier options were fine.
        let result = Query::build(&[Opt::fields(["name"]), Opt::limit(100)]);
        assert!(matches!(result, Err(Error::OutOfRange)));
    }

    #[test]
    fn test_exclusive_options_last_wins() {
        let query = Query::build(&[
            Opt::limit(5),
            Opt::limit(10),
            Opt::offset(0),
            Opt::offset(20),
            Opt::fields(["name"]),
            Opt::fields(["slug"]),
            Opt::order("name", Direction::Ascending),
            Opt::order("name", Direction::Descending),
            Opt::search("first"),
            Opt::search("second"),
        ])
        .unwrap();
        assert_eq!(
            query.encode(),
            "?fields=slug&order=name:desc&limit=10&offset=20&search=second"
        );
    }

    #[test]
    fn test_search_term_is_percent_encoded() {
        let query = Query::build(&[Opt::search("mario & luigi")]).unwrap();
        assert_eq!(query.encode(), "?search=mario%20%26%20luigi");
    }

    #[test]
    fn test_filter_value_is_percent_encoded() {
        let query = Query::build(&[Opt::filter("name", Operator::Prefix, "zelda: ")]).unwrap();
        assert_eq!(query.encode(), "?filter[name][prefix]=zelda%3A%20");
    }

    #[test]
    fn test_encode_parse_round_trip() {
        let query = Query::build(&[
            Opt::fields(["name", "rating"]),
            Opt::filter("rating", Operator::GreaterThan, "50"),
            Opt::filter("genres", Operator::In, "4,12"),
            Opt::order("rating", Direction::Descending),
            Opt::limit(25),
            Opt::offset(50),
            Opt::search("dark souls"),
        ])
        .unwrap();

        // Parse the encoded string back into key/value pairs, the same way
        // the upstream request parser would see them.
        let encoded = query.encode();
        let pairs: Vec<(String, String)> = encoded
            .trim_start_matches('?')
            .split('&')
            .map(|pair| {
                let (k, v) = pair.split_once('=').unwrap();
                (
                    k.to_string(),
                    urlencoding::decode(v).unwrap().into_owned(),
                )
            })
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("fields".to_string(), "name,rating".to_string()),
                ("filter[rating][gt]".to_string(), "50".to_string()),
                ("filter[genres][in]".to_string(), "4,12".to_string()),
                ("order".to_string(), "rating:desc".to_string()),
                ("limit".to_string(), "25".to_string()),
                ("offset".to_string(), "50".to_string()),
                ("search".to_string(), "dark souls".to_string()),
            ]
        );
    }

    #[test]
    fn test_set_search_overwrites_option_term() {
        let mut query = Query::build(&[Opt::search("stale")]).unwrap();
        query.set_search("fresh");
        assert_eq!(query.encode(), "?search=fresh");
    }
}
