//! Repository record source port.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::RepositoryRecord;

/// Errors from fetching repository records.
///
/// These are domain-level errors that consumers can handle.
/// Implementation-specific errors (HTTP, JSON) are mapped to these.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream answered with a non-success status.
    #[error("Upstream request failed with status {status}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
    },

    /// Upstream rate limit exceeded.
    #[error("Rate limit exceeded, try again later")]
    RateLimited,

    /// The credential was missing, invalid, or lacks access.
    #[error("Upstream rejected the credential")]
    Unauthorized,

    /// Network or connectivity error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The upstream body was not a repository listing.
    #[error("Invalid upstream response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Result type alias for repository source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Supplies the list of repository records for one page load.
///
/// The page shell calls this once per (uncached) page render; the browser
/// never performs I/O itself. The implementation for the GitHub REST API
/// lives in `folio-github`.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    /// Fetch all records, newest first.
    async fn fetch_records(&self) -> SourceResult<Vec<RepositoryRecord>>;
}

/// A source backed by a fixed in-memory list.
///
/// Used when no upstream owner is configured and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticRepositorySource {
    records: Arc<[RepositoryRecord]>,
}

impl StaticRepositorySource {
    /// Create a source that always returns `records`.
    pub fn new(records: impl Into<Arc<[RepositoryRecord]>>) -> Self {
        Self {
            records: records.into(),
        }
    }

    /// A source that always returns an empty list.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RepositorySource for StaticRepositorySource {
    async fn fetch_records(&self) -> SourceResult<Vec<RepositoryRecord>> {
        Ok(self.records.to_vec())
    }
}
