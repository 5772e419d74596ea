//! Configuration types for the GameDB API SDK.
//!
//! The main types in this module are:
//!
//! - [`Config`]: the immutable configuration shared by all client calls
//! - [`ConfigBuilder`]: a builder for constructing [`Config`] instances
//! - [`ApiKey`]: a validated API key newtype with masked debug output
//! - [`BaseUrl`]: a validated catalog base URL
//!
//! # Example
//!
//! ```rust
//! use gamedb_api::{ApiKey, Config};
//!
//! let config = Config::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, BaseUrl};

use crate::error::ConfigError;

/// The default public catalog endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.gamedb.io/v1/";

/// Configuration for the GameDB API SDK.
///
/// Holds the credential material and base URL shared by every request a
/// [`Client`](crate::Client) makes. Immutable once built; `Clone`, `Send`,
/// and `Sync`, so it is safe to share across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use gamedb_api::{ApiKey, BaseUrl, Config};
///
/// let config = Config::builder()
///     .api_key(ApiKey::new("my-api-key").unwrap())
///     .base_url(BaseUrl::new("https://api.gamedb.io/v1/").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.base_url().as_ref(), "https://api.gamedb.io/v1/");
/// ```
#[derive(Clone, Debug)]
pub struct Config {
    api_key: ApiKey,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
}

impl Config {
    /// Creates a new builder for constructing a `Config`.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the catalog base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify Config is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Config>();
};

/// Builder for constructing [`Config`] instances.
///
/// `api_key` is required. `base_url` defaults to [`DEFAULT_BASE_URL`];
/// overriding it is mainly useful for pointing tests at a mock server.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    api_key: Option<ApiKey>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl ConfigBuilder {
    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Sets the catalog base URL.
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets a prefix for the User-Agent header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` was not
    /// set. The default base URL is a compile-time constant, so falling
    /// back to it cannot fail.
    pub fn build(self) -> Result<Config, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };

        Ok(Config {
            api_key,
            base_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
