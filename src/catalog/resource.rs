//! The generic catalog resource accessor.
//!
//! [`CatalogResource`] provides the uniform Get / List / Index / Search /
//! Count / Fields surface once, as default trait methods; each schema type
//! instantiates it by naming its endpoint:
//!
//! ```rust,ignore
//! impl CatalogResource for Genre {
//!     const NAME: &'static str = "Genre";
//!     const ENDPOINT: &'static str = "genres";
//! }
//!
//! let genre = Genre::get(&client, 7, &[Opt::fields(["name"])]).await?;
//! let genres = Genre::list(&client, &[7, 8], &[]).await?;
//! let total = Genre::count(&client, &[]).await?;
//! ```
//!
//! Every method follows the same skeleton: validate locally, build the
//! query, dispatch one GET, classify the decoded result. Local failures
//! (`NegativeId`, `EmptyIds`, `OutOfRange`) never reach the network.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::client::Client;
use crate::error::Error;
use crate::query::{Opt, Query};

/// A catalog entity type reachable through the generic accessor methods.
///
/// Implementors supply the two constants; all six accessors come as
/// default implementations parameterized over the decoded record shape.
#[allow(async_fn_in_trait)]
pub trait CatalogResource: DeserializeOwned + Send + Sync + Sized {
    /// The singular resource name (e.g., "Game"). Used for diagnostics.
    const NAME: &'static str;

    /// The endpoint path segment (e.g., "games").
    const ENDPOINT: &'static str;

    /// Fetches a single record by its catalog ID.
    ///
    /// The upstream answers single-ID lookups with a one-element array.
    /// If more than one record comes back the first is returned and the
    /// rest are discarded; this matches observed upstream behavior and is
    /// deliberately not corrected here.
    ///
    /// # Errors
    ///
    /// - [`Error::NegativeId`] if `id < 0`, with no network call made;
    /// - [`Error::OutOfRange`] for invalid options, with no network call;
    /// - [`Error::NoResults`] if the decoded array is empty;
    /// - [`Error::InvalidJson`] for an empty or malformed body.
    async fn get(client: &Client, id: i64, opts: &[Opt]) -> Result<Self, Error> {
        if id < 0 {
            return Err(Error::NegativeId);
        }
        let query = Query::build(opts)?;
        let url = client.single_url(Self::ENDPOINT, id, &query);

        let mut records: Vec<Self> = client.request_json(&url).await?;
        if records.is_empty() {
            return Err(Error::NoResults);
        }
        Ok(records.swap_remove(0))
    }

    /// Fetches a batch of records by their catalog IDs.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyIds`] if `ids` is empty, with no network call made;
    /// - [`Error::NegativeId`] if any ID is negative, checked before any
    ///   network call (no partial requests);
    /// - [`Error::OutOfRange`] for invalid options, with no network call;
    /// - [`Error::NoResults`] if the decoded array is empty;
    /// - [`Error::InvalidJson`] for an empty or malformed body.
    async fn list(client: &Client, ids: &[i64], opts: &[Opt]) -> Result<Vec<Self>, Error> {
        if ids.is_empty() {
            return Err(Error::EmptyIds);
        }
        if ids.iter().any(|&id| id < 0) {
            return Err(Error::NegativeId);
        }
        let query = Query::build(opts)?;
        let url = client.multi_url(Self::ENDPOINT, ids, &query);

        let records: Vec<Self> = client.request_json(&url).await?;
        if records.is_empty() {
            return Err(Error::NoResults);
        }
        Ok(records)
    }

    /// Fetches records without an ID constraint, subject only to the
    /// given options.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogResource::list`], minus the ID checks.
    async fn index(client: &Client, opts: &[Opt]) -> Result<Vec<Self>, Error> {
        let query = Query::build(opts)?;
        let url = client.index_url(Self::ENDPOINT, &query);

        let records: Vec<Self> = client.request_json(&url).await?;
        if records.is_empty() {
            return Err(Error::NoResults);
        }
        Ok(records)
    }

    /// Searches the catalog with a full-text term.
    ///
    /// The explicit `term` overwrites any [`Opt::Search`] present in
    /// `opts`.
    ///
    /// # Errors
    ///
    /// Same as [`CatalogResource::index`].
    async fn search(client: &Client, term: &str, opts: &[Opt]) -> Result<Vec<Self>, Error> {
        let mut query = Query::build(opts)?;
        query.set_search(term);
        let url = client.index_url(Self::ENDPOINT, &query);

        let records: Vec<Self> = client.request_json(&url).await?;
        if records.is_empty() {
            return Err(Error::NoResults);
        }
        Ok(records)
    }

    /// Counts the records matching the given options.
    ///
    /// The counting endpoint signals "no matching records" with an empty
    /// array rather than a zero count; a literal `{"count": 0}` is a
    /// successful count of zero. The two must not collapse.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfRange`] for invalid options, with no network call;
    /// - [`Error::NoResults`] for an empty-array body;
    /// - [`Error::InvalidJson`] for an empty body or any shape without a
    ///   usable `count` integer.
    async fn count(client: &Client, opts: &[Opt]) -> Result<u64, Error> {
        let query = Query::build(opts)?;
        let url = client.count_url(Self::ENDPOINT, &query);

        let body: Value = client.request_json(&url).await?;
        match body {
            Value::Array(items) => match items.first() {
                None => Err(Error::NoResults),
                Some(Value::Object(map)) => {
                    map.get("count").and_then(Value::as_u64).ok_or(Error::InvalidJson)
                }
                Some(_) => Err(Error::InvalidJson),
            },
            Value::Object(map) => {
                map.get("count").and_then(Value::as_u64).ok_or(Error::InvalidJson)
            }
            _ => Err(Error::InvalidJson),
        }
    }

    /// Fetches the field names this resource type supports, as reported
    /// by the metadata endpoint.
    ///
    /// Unlike the other accessors, an explicit empty list is a valid
    /// successful result here, not [`Error::NoResults`]. Callers depend on
    /// that asymmetry.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfRange`] for invalid options, with no network call;
    /// - [`Error::InvalidJson`] for an empty or malformed body.
    async fn fields(client: &Client, opts: &[Opt]) -> Result<Vec<String>, Error> {
        let query = Query::build(opts)?;
        let url = client.meta_url(Self::ENDPOINT, &query);

        client.request_json(&url).await
    }
}
