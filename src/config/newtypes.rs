//! Validated newtype wrappers for configuration values.
//!
//! These wrappers validate their contents on construction so that a built
//! [`Config`](crate::Config) can never hold an unusable value.

use std::fmt;

use crate::error::ConfigError;

/// A validated GameDB API key.
///
/// The key is required to be non-empty, and the `Debug` implementation
/// masks its value to keep credentials out of logs.
///
/// # Example
///
/// ```rust
/// use gamedb_api::ApiKey;
///
/// let key = ApiKey::new("my-api-key").unwrap();
/// assert_eq!(key.as_ref(), "my-api-key");
/// assert_eq!(format!("{:?}", key), "ApiKey(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Creates a new validated API key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ApiKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(*****)")
    }
}

/// A validated catalog base URL.
///
/// The URL must use an `http` or `https` scheme and is normalized to end
/// with a trailing slash so endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use gamedb_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.gamedb.io/v1").unwrap();
/// assert_eq!(url.as_ref(), "https://api.gamedb.io/v1/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL does not use an
    /// http(s) scheme or has no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        if rest.is_empty() || rest.starts_with('/') {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let normalized = if url.ends_with('/') {
            url
        } else {
            format!("{url}/")
        };

        Ok(Self(normalized))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
