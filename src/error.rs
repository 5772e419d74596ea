//! Error types for the GameDB API SDK.
//!
//! The SDK surfaces a closed set of error kinds via [`Error`]. Callers are
//! expected to branch on the variant, not on the message text:
//!
//! ```rust,ignore
//! match Game::get(&client, id, &[]).await {
//!     Ok(game) => println!("{}", game.name),
//!     Err(Error::NoResults) => println!("no such game"),
//!     Err(Error::NegativeId) => println!("bad input"),
//!     Err(e) => return Err(e),
//! }
//! ```
//!
//! The local variants (`NegativeId`, `EmptyIds`, `OutOfRange`) are always
//! detected before any network request is issued. No error is retried,
//! swallowed, or logged inside the SDK.

use thiserror::Error;

/// Errors returned by catalog accessor methods.
///
/// The first five variants form the classified taxonomy; `Status` and
/// `Network` pass raw transport failures through unchanged.
#[derive(Debug, Error)]
pub enum Error {
    /// An ID argument was negative. Detected locally, before dispatch.
    #[error("negative ID provided; catalog IDs are non-negative")]
    NegativeId,

    /// A multi-ID call was made with zero IDs. Detected locally.
    #[error("no IDs provided; at least one ID is required")]
    EmptyIds,

    /// An option value violated a range constraint (limit or offset
    /// bounds). Detected locally, before dispatch.
    ///
    /// All range violations map to this single sentinel so callers have
    /// one stable kind to branch on regardless of which option was at
    /// fault.
    #[error("option value is out of range")]
    OutOfRange,

    /// The response body was empty, malformed, or the wrong shape for the
    /// requested decode target.
    ///
    /// Malformed JSON and wrong-shaped JSON are deliberately not
    /// distinguished; both mean nothing usable came back.
    #[error("response body is empty or contains invalid JSON")]
    InvalidJson,

    /// The upstream returned an empty result set where empty is not a
    /// semantically valid answer (get, list, index, count).
    ///
    /// `fields` is the exception: an explicit empty field list is a
    /// successful result, never `NoResults`.
    #[error("no results match the request")]
    NoResults,

    /// The upstream returned a non-2xx HTTP status.
    #[error("unexpected HTTP status {code}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The raw response body, for diagnostics.
        body: String,
    },

    /// A transport-level failure (DNS, connection refused, TLS, ...).
    #[error(transparent)]
    Network(#[from] reqwest::Error),
}

/// Errors that can occur during SDK configuration.
///
/// All configuration constructors return `Result<T, ConfigError>` to enable
/// fail-fast validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid GameDB API key.")]
    EmptyApiKey,

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide an http(s) URL (e.g., 'https://api.gamedb.io/v1/').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<ConfigError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_error_messages() {
        assert!(Error::NegativeId.to_string().contains("negative ID"));
        assert!(Error::EmptyIds.to_string().contains("at least one ID"));
        assert!(Error::OutOfRange.to_string().contains("out of range"));
    }

    #[test]
    fn test_remote_error_messages() {
        assert!(Error::InvalidJson.to_string().contains("invalid JSON"));
        assert!(Error::NoResults.to_string().contains("no results"));
    }

    #[test]
    fn test_status_error_includes_code() {
        let error = Error::Status {
            code: 503,
            body: "unavailable".to_string(),
        };
        assert!(error.to_string().contains("503"));
    }

    #[test]
    fn test_errors_can_be_matched_on_kind() {
        let error = Error::NoResults;
        assert!(matches!(error, Error::NoResults));
        assert!(!matches!(error, Error::InvalidJson));
    }

    #[test]
    fn test_empty_api_key_error_message() {
        let error = ConfigError::EmptyApiKey;
        assert!(error.to_string().contains("API key cannot be empty"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "ftp://nope".to_string(),
        };
        assert!(error.to_string().contains("ftp://nope"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "api_key" };
        assert!(error.to_string().contains("api_key"));
        assert!(error.to_string().contains("must be set"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &Error::NoResults;
        let _: &dyn std::error::Error = &ConfigError::EmptyApiKey;
    }
}
