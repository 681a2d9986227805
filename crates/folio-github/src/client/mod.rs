//! GitHub client for listing an owner's repositories.
//!
//! This module provides the main client interface for interacting with
//! the GitHub REST API.

mod repos;

use crate::config::GithubClientConfig;
use crate::error::GhResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::GhConfig;
use folio_core::{SourceError, SourceResult};
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default GitHub client using the reqwest HTTP backend.
pub type DefaultGithubClient = GithubClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the GitHub REST API.
///
/// Generic over an HTTP backend so tests can substitute canned responses.
/// Use `DefaultGithubClient` for production code.
pub struct GithubClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) config: GhConfig,
}

impl DefaultGithubClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with `SourceError::Configuration` when the base URL or user
    /// agent is unusable.
    pub fn new(config: &GithubClientConfig) -> SourceResult<Self> {
        let internal_config = to_internal_config(config)?;
        let backend = ReqwestBackend::new(&internal_config).map_err(|e| {
            SourceError::Configuration {
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            backend,
            config: internal_config,
        })
    }
}

impl<B: HttpBackend> GithubClient<B> {
    /// Create a new client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(config: GhConfig, backend: B) -> Self {
        Self { backend, config }
    }

    /// The account whose repositories are listed.
    pub fn owner(&self) -> &str {
        &self.config.owner
    }
}

fn to_internal_config(config: &GithubClientConfig) -> SourceResult<GhConfig> {
    let owner = config.owner.trim();
    if owner.is_empty() {
        return Err(SourceError::Configuration {
            message: "GitHub owner must not be empty".to_string(),
        });
    }

    let base_url = parse_base_url(&config.base_url).map_err(|e| SourceError::Configuration {
        message: format!("invalid GitHub base URL '{}': {e}", config.base_url),
    })?;

    Ok(GhConfig {
        base_url,
        owner: owner.to_string(),
        user_agent: config.user_agent.clone(),
        timeout: config.timeout,
        token: config.token.clone(),
        per_page: config.per_page,
        max_retries: config.max_retries,
        #[allow(clippy::cast_possible_truncation)] // Duration milliseconds won't exceed u64 in practice
        retry_base_delay_ms: config.retry_base_delay.as_millis() as u64,
    })
}

fn parse_base_url(raw: &str) -> GhResult<Url> {
    Ok(Url::parse(raw.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_default_client_creation() {
        let client = DefaultGithubClient::new(&GithubClientConfig::new("octocat")).unwrap();
        assert_eq!(client.owner(), "octocat");
        assert_eq!(client.config.base_url.as_str(), "https://api.github.com/");
    }

    #[test]
    fn test_internal_config_carries_settings() {
        let config = GithubClientConfig::new(" octocat ")
            .with_token("secret")
            .with_per_page(50)
            .with_max_retries(2)
            .with_retry_delay(Duration::from_millis(250));

        let internal = to_internal_config(&config).unwrap();
        assert_eq!(internal.owner, "octocat");
        assert_eq!(internal.token.as_deref(), Some("secret"));
        assert_eq!(internal.per_page, 50);
        assert_eq!(internal.max_retries, 2);
        assert_eq!(internal.retry_base_delay_ms, 250);
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let config = GithubClientConfig::new("octocat").with_base_url("not a url");
        let result = DefaultGithubClient::new(&config);
        assert!(matches!(result, Err(SourceError::Configuration { .. })));
    }

    #[test]
    fn test_empty_owner_is_configuration_error() {
        let result = DefaultGithubClient::new(&GithubClientConfig::new("   "));
        assert!(matches!(result, Err(SourceError::Configuration { .. })));
    }
}
