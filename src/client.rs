//! HTTP client for catalog API communication.
//!
//! [`Client`] owns the shared transport state: a `reqwest::Client`, the
//! catalog base URL, and the default headers carrying the API key. It is
//! immutable after construction and safe to share across async tasks. Each
//! accessor call performs exactly one GET; there are no retries, no caching,
//! and no timeouts beyond the transport default.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::Error;
use crate::query::Query;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the GameDB catalog API.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`; concurrent callers share only this immutable
/// state, so no locking is needed.
///
/// # Example
///
/// ```rust,ignore
/// use gamedb_api::{ApiKey, Client, Config};
/// use gamedb_api::catalog::{CatalogResource, Game};
///
/// let config = Config::builder()
///     .api_key(ApiKey::new("my-api-key")?)
///     .build()?;
/// let client = Client::new(&config);
///
/// let game = Game::get(&client, 9644, &[]).await?;
/// ```
#[derive(Debug)]
pub struct Client {
    /// The internal reqwest HTTP client.
    http: reqwest::Client,
    /// Base URL with trailing slash (e.g., `https://api.gamedb.io/v1/`).
    base_url: String,
    /// Default headers included in every request.
    default_headers: HashMap<String, String>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client {
    /// Creates a new client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}GameDB API Library v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "x-api-key".to_string(),
            config.api_key().as_ref().to_string(),
        );

        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url().as_ref().to_string(),
            default_headers,
        }
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// URL for a single-ID lookup: `<base>/<endpoint>/<id><query>`.
    pub(crate) fn single_url(&self, endpoint: &str, id: i64, query: &Query) -> String {
        format!("{}{}/{}{}", self.base_url, endpoint, id, query.encode())
    }

    /// URL for a multi-ID lookup: `<base>/<endpoint>/<id1,id2,...><query>`.
    pub(crate) fn multi_url(&self, endpoint: &str, ids: &[i64], query: &Query) -> String {
        let joined = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        format!("{}{}/{}{}", self.base_url, endpoint, joined, query.encode())
    }

    /// URL for an unfiltered listing or search: `<base>/<endpoint>/<query>`.
    pub(crate) fn index_url(&self, endpoint: &str, query: &Query) -> String {
        format!("{}{}/{}", self.base_url, endpoint, query.encode())
    }

    /// URL for the counting endpoint: `<base>/<endpoint>/count<query>`.
    pub(crate) fn count_url(&self, endpoint: &str, query: &Query) -> String {
        format!("{}{}/count{}", self.base_url, endpoint, query.encode())
    }

    /// URL for the field-metadata endpoint: `<base>/<endpoint>/meta<query>`.
    pub(crate) fn meta_url(&self, endpoint: &str, query: &Query) -> String {
        format!("{}{}/meta{}", self.base_url, endpoint, query.encode())
    }

    /// Issues a single GET and decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] for transport failures;
    /// - [`Error::Status`] for any non-2xx response, body preserved;
    /// - [`Error::InvalidJson`] when the body (including an empty body)
    ///   does not decode into `T`.
    pub(crate) async fn request_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        tracing::debug!(url, "dispatching catalog request");

        let mut request = self.http.get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request.send().await?;
        let code = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&code) {
            return Err(Error::Status { code, body });
        }

        serde_json::from_str(&body).map_err(|_| Error::InvalidJson)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BaseUrl};
    use crate::query::Opt;

    fn create_test_client() -> Client {
        let config = Config::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .base_url(BaseUrl::new("https://api.test.example/v1/").unwrap())
            .build()
            .unwrap();
        Client::new(&config)
    }

    #[test]
    fn test_api_key_header_injection() {
        let client = create_test_client();
        assert_eq!(
            client.default_headers().get("x-api-key"),
            Some(&"test-key".to_string())
        );
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_test_client();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("GameDB API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = Config::builder()
            .api_key(ApiKey::new("test-key").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = Client::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_single_url_construction() {
        let client = create_test_client();
        let query = Query::build(&[Opt::fields(["name"])]).unwrap();
        assert_eq!(
            client.single_url("games", 9644, &query),
            "https://api.test.example/v1/games/9644?fields=name"
        );
    }

    #[test]
    fn test_multi_url_joins_ids_with_commas() {
        let client = create_test_client();
        let query = Query::build(&[]).unwrap();
        assert_eq!(
            client.multi_url("games", &[9644, 40, 7], &query),
            "https://api.test.example/v1/games/9644,40,7"
        );
    }

    #[test]
    fn test_index_count_and_meta_urls() {
        let client = create_test_client();
        let query = Query::build(&[]).unwrap();
        assert_eq!(
            client.index_url("companies", &query),
            "https://api.test.example/v1/companies/"
        );
        assert_eq!(
            client.count_url("companies", &query),
            "https://api.test.example/v1/companies/count"
        );
        assert_eq!(
            client.meta_url("companies", &query),
            "https://api.test.example/v1/companies/meta"
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }
}
