//! Public configuration for the GitHub client.
//!
//! This module provides a stable public API for configuring the client.
//! The internal config is derived from this.

use std::time::Duration;

/// Maximum page size accepted by the listing endpoint.
pub(crate) const MAX_PER_PAGE: u8 = 100;

/// Configuration for the GitHub client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use folio_github::GithubClientConfig;
/// use std::time::Duration;
///
/// let config = GithubClientConfig::new("octocat")
///     .with_timeout(Duration::from_secs(10))
///     .with_user_agent("my-portfolio/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// Account whose repositories are listed
    pub(crate) owner: String,
    /// Base URL for the GitHub REST API
    pub(crate) base_url: String,
    /// User agent string for HTTP requests (GitHub rejects requests without one)
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Optional bearer token
    pub(crate) token: Option<String>,
    /// Number of repositories requested per listing
    pub(crate) per_page: u8,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
}

impl GithubClientConfig {
    /// Create a configuration for listing `owner`'s repositories.
    #[must_use]
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            base_url: "https://api.github.com".to_string(),
            user_agent: concat!("folio-github/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
            per_page: MAX_PER_PAGE,
            max_retries: 0,
            retry_base_delay: Duration::from_millis(500),
        }
    }

    /// The configured owner.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Set the base URL for the GitHub API.
    ///
    /// Defaults to `https://api.github.com`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set a bearer token.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional bearer token. Blank tokens are ignored.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Set how many repositories to request, clamped to `1..=100`.
    #[must_use]
    pub fn with_per_page(mut self, per_page: u8) -> Self {
        self.per_page = per_page.clamp(1, MAX_PER_PAGE);
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 0: a failed page-load fetch is not retried.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 500ms.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }
}
