//! Internal error types for GitHub operations.
//!
//! These errors are internal to `folio-github` and are mapped to the core
//! `SourceError` at the boundary.

use thiserror::Error;

/// Result type alias for GitHub operations.
pub type GhResult<T> = Result<T, GhError>;

/// Errors related to GitHub API operations.
#[derive(Debug, Error)]
pub enum GhError {
    /// API request failed with an HTTP error status.
    #[error("GitHub API request failed with status {status}: {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from GitHub API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The owner does not exist.
    #[error("GitHub owner '{owner}' not found")]
    OwnerNotFound {
        /// The owner that was not found
        owner: String,
    },

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A configured header value (user agent) is not valid.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_request_failed_error_message() {
        let error = GhError::ApiRequestFailed {
            status: 503,
            url: "https://api.github.com/users/octocat/repos".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("api.github.com"));
    }

    #[test]
    fn test_owner_not_found_error_message() {
        let error = GhError::OwnerNotFound {
            owner: "no-such-user".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("no-such-user"));
        assert!(msg.contains("not found"));
    }

    #[test]
    fn test_json_parse_error_converts() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let error: GhError = err.into();
        assert!(matches!(error, GhError::JsonParse(_)));
    }
}
