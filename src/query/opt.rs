//! Request option values.
//!
//! An [`Opt`] is a single configurable request modifier: field selection, a
//! filter predicate, a sort order, a pagination bound, or a search term.
//! Options are plain immutable values; they are validated and folded into a
//! [`Query`](crate::query::Query) by the accessor that receives them.

/// A single request modifier accepted by every catalog accessor method.
///
/// Options are composed by passing a slice to an accessor:
///
/// ```rust,ignore
/// let games = Game::index(&client, &[
///     Opt::fields(["name", "rating"]),
///     Opt::filter("rating", Operator::GreaterThan, "80"),
///     Opt::order("rating", Direction::Descending),
///     Opt::limit(20),
/// ]).await?;
/// ```
///
/// Filters accumulate in the order given; the other kinds are exclusive
/// and the last occurrence wins (see [`Query::build`](crate::query::Query::build)).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opt {
    /// Select which fields the upstream should return, comma-joined on the
    /// wire. Field names are opaque; the upstream is the source of truth.
    Fields(Vec<String>),

    /// Constrain results with a `filter[field][op]=value` predicate.
    Filter {
        /// The field the predicate applies to.
        field: String,
        /// The comparison operator.
        op: Operator,
        /// The comparison value, rendered verbatim (percent-encoded).
        value: String,
    },

    /// Sort results by a field in the given direction.
    Order {
        /// The field to sort by.
        field: String,
        /// Sort direction.
        direction: Direction,
    },

    /// Cap the number of returned records. Valid range is
    /// `1..=`[`MAX_LIMIT`](crate::query::MAX_LIMIT).
    Limit(u32),

    /// Skip the first `n` records. Valid range is
    /// `0..=`[`MAX_OFFSET`](crate::query::MAX_OFFSET).
    Offset(u32),

    /// Full-text search term.
    Search(String),
}

impl Opt {
    /// Creates a field-selection option.
    pub fn fields<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Fields(names.into_iter().map(Into::into).collect())
    }

    /// Creates a filter option.
    pub fn filter(field: impl Into<String>, op: Operator, value: impl Into<String>) -> Self {
        Self::Filter {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Creates a sort-order option.
    pub fn order(field: impl Into<String>, direction: Direction) -> Self {
        Self::Order {
            field: field.into(),
            direction,
        }
    }

    /// Creates a result-limit option.
    #[must_use]
    pub const fn limit(n: u32) -> Self {
        Self::Limit(n)
    }

    /// Creates a pagination-offset option.
    #[must_use]
    pub const fn offset(n: u32) -> Self {
        Self::Offset(n)
    }

    /// Creates a search-term option.
    pub fn search(term: impl Into<String>) -> Self {
        Self::Search(term.into())
    }
}

/// Filter comparison operators and their wire tokens.
///
/// The token appears in the query string as `filter[field][token]=value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Exact match (`eq`).
    Equals,
    /// Exact mismatch (`not_eq`).
    NotEquals,
    /// Strictly greater than (`gt`).
    GreaterThan,
    /// Greater than or equal (`gte`).
    GreaterThanEqual,
    /// Strictly less than (`lt`).
    LessThan,
    /// Less than or equal (`lte`).
    LessThanEqual,
    /// Value starts with the given prefix (`prefix`).
    Prefix,
    /// Field is present (`exists`).
    Exists,
    /// Field is absent (`not_exists`).
    NotExists,
    /// Value is in the given set (`in`).
    In,
    /// Value is not in the given set (`not_in`).
    NotIn,
    /// Any of the given values match (`any`).
    Any,
}

impl Operator {
    /// Returns the query-string token for this operator.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Equals => "eq",
            Self::NotEquals => "not_eq",
            Self::GreaterThan => "gt",
            Self::GreaterThanEqual => "gte",
            Self::LessThan => "lt",
            Self::LessThanEqual => "lte",
            Self::Prefix => "prefix",
            Self::Exists => "exists",
            Self::NotExists => "not_exists",
            Self::In => "in",
            Self::NotIn => "not_in",
            Self::Any => "any",
        }
    }
}

/// Sort direction for [`Opt::Order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lowest first (`asc`).
    Ascending,
    /// Highest first (`desc`).
    Descending,
}

impl Direction {
    /// Returns the query-string token for this direction.
    #[must_use]
    pub const fn as_token(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_tokens() {
        assert_eq!(Operator::Equals.as_token(), "eq");
        assert_eq!(Operator::NotEquals.as_token(), "not_eq");
        assert_eq!(Operator::GreaterThan.as_token(), "gt");
        assert_eq!(Operator::GreaterThanEqual.as_token(), "gte");
        assert_eq!(Operator::LessThan.as_token(), "lt");
        assert_eq!(Operator::LessThanEqual.as_token(), "lte");
        assert_eq!(Operator::Prefix.as_token(), "prefix");
        assert_eq!(Operator::Exists.as_token(), "exists");
        assert_eq!(Operator::NotExists.as_token(), "not_exists");
        assert_eq!(Operator::In.as_token(), "in");
        assert_eq!(Operator::NotIn.as_token(), "not_in");
        assert_eq!(Operator::Any.as_token(), "any");
    }

    #[test]
    fn test_direction_tokens() {
        assert_eq!(Direction::Ascending.as_token(), "asc");
        assert_eq!(Direction::Descending.as_token(), "desc");
    }

    #[test]
    fn test_fields_constructor_collects_names() {
        let opt = Opt::fields(["name", "slug"]);
        assert_eq!(
            opt,
            Opt::Fields(vec!["name".to_string(), "slug".to_string()])
        );
    }

    #[test]
    fn test_filter_constructor() {
        let opt = Opt::filter("rating", Operator::GreaterThan, "75");
        assert_eq!(
            opt,
            Opt::Filter {
                field: "rating".to_string(),
                op: Operator::GreaterThan,
                value: "75".to_string(),
            }
        );
    }

    #[test]
    fn test_opts_are_cloneable_values() {
        let opt = Opt::search("zelda");
        let copy = opt.clone();
        assert_eq!(opt, copy);
    }
}
