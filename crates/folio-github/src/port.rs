//! Port trait implementation for `GithubClient`.
//!
//! Implements the core-owned `RepositorySource` trait, mapping internal
//! GitHub errors onto `SourceError` at the boundary.

use async_trait::async_trait;
use folio_core::{RepositoryRecord, RepositorySource, SourceError, SourceResult};

use crate::client::GithubClient;
use crate::error::GhError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `GhError` to core `SourceError`.
fn map_error(err: GhError) -> SourceError {
    match err {
        GhError::ApiRequestFailed { status, .. } => match status {
            401 | 403 => SourceError::Unauthorized,
            429 => SourceError::RateLimited,
            _ => SourceError::UpstreamStatus { status },
        },
        GhError::OwnerNotFound { .. } => SourceError::UpstreamStatus { status: 404 },
        GhError::InvalidResponse { message } => SourceError::InvalidResponse { message },
        GhError::Network(e) => SourceError::Network {
            message: e.to_string(),
        },
        GhError::InvalidUrl(e) => SourceError::Configuration {
            message: e.to_string(),
        },
        GhError::InvalidHeader(e) => SourceError::Configuration {
            message: e.to_string(),
        },
        GhError::JsonParse(e) => SourceError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementation
// ============================================================================

#[async_trait]
impl<B: HttpBackend + Send + Sync> RepositorySource for GithubClient<B> {
    async fn fetch_records(&self) -> SourceResult<Vec<RepositoryRecord>> {
        self.list_owner_repos().await.map_err(|e| {
            tracing::warn!(
                target: "folio.github",
                owner = %self.config.owner,
                error = %e,
                "Repository listing failed"
            );
            map_error(e)
        })
    }
}
