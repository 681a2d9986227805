//! Internal request types for the GitHub REST API.
//!
//! These types are internal to `folio-github` and are not exposed to consumers.

use std::time::Duration;

use url::Url;

// ============================================================================
// Configuration (used internally, see config.rs for public config)
// ============================================================================

/// Internal configuration for the GitHub client.
#[derive(Debug, Clone)]
pub struct GhConfig {
    /// Base URL for the GitHub API (default: <https://api.github.com>)
    pub base_url: Url,
    /// Account whose repositories are listed
    pub owner: String,
    /// User agent sent with every request
    pub user_agent: String,
    /// Request timeout
    pub timeout: Duration,
    /// Optional bearer token
    pub token: Option<String>,
    /// Repositories requested per listing (default: 100)
    pub per_page: u8,
    /// Maximum number of retry attempts for transient errors (default: 0)
    pub max_retries: u8,
    /// Base delay in milliseconds for exponential backoff (default: 500)
    pub retry_base_delay_ms: u64,
}

#[cfg(test)]
impl GhConfig {
    /// Config pointing at the public API for `owner`, used by tests.
    pub fn for_owner(owner: &str) -> Self {
        Self {
            base_url: Url::parse("https://api.github.com").expect("default GitHub API URL is valid"),
            owner: owner.to_string(),
            user_agent: "folio-github-tests".to_string(),
            timeout: Duration::from_secs(5),
            token: None,
            per_page: crate::config::MAX_PER_PAGE,
            max_retries: 0,
            retry_base_delay_ms: 1,
        }
    }
}

// ============================================================================
// Listing Query
// ============================================================================

/// Query parameters for listing an owner's repositories.
#[derive(Debug, Clone)]
pub struct GhListQuery {
    /// Account to list
    pub owner: String,
    /// Results per page (1..=100)
    pub per_page: u8,
    /// Sort direction: true = ascending, false = descending
    pub sort_ascending: bool,
}

impl GhListQuery {
    /// Newest-first listing of up to `per_page` repositories.
    pub fn newest_first(owner: impl Into<String>, per_page: u8) -> Self {
        Self {
            owner: owner.into(),
            per_page,
            sort_ascending: false,
        }
    }

    /// The `sort` query parameter value.
    pub const fn sort(&self) -> &'static str {
        "created"
    }

    /// The `direction` query parameter value.
    pub const fn direction(&self) -> &'static str {
        if self.sort_ascending { "asc" } else { "desc" }
    }
}
