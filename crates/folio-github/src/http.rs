//! HTTP backend abstraction for the GitHub API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with optional retries for transient errors.

use crate::error::{GhError, GhResult};
use crate::models::GhConfig;
use crate::url::owner_from_path;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const GITHUB_JSON: &str = "application/vnd.github+json";

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for HTTP backends that can fetch JSON from URLs.
///
/// This is an implementation detail - external code should use the
/// `RepositorySource` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Fetch JSON from a URL and deserialize it.
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GhResult<T>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Server errors (5xx) and network errors are retried with exponential
/// backoff up to `max_retries` times.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay_ms: u64,
    auth_token: Option<String>,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: &GhConfig) -> GhResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay_ms: config.retry_base_delay_ms,
            auth_token: config.token.clone(),
        })
    }

    /// Build a request with optional authentication.
    fn build_request(&self, url: &Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url.as_str());
        if let Some(ref token) = self.auth_token {
            request = request.header(AUTHORIZATION, bearer(token));
        }
        request
    }

    /// Fetch a URL, retrying transient errors.
    async fn fetch_with_retry(&self, url: &Url) -> GhResult<reqwest::Response> {
        let mut last_error: Option<GhError> = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay_ms = self.retry_base_delay_ms * 2u64.pow(u32::from(attempt) - 1);
                tracing::debug!(
                    target: "folio.github",
                    attempt,
                    delay_ms,
                    "Retrying GitHub request"
                );
                tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            }

            match self.build_request(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < self.max_retries {
                        last_error = Some(GhError::ApiRequestFailed {
                            status: status.as_u16(),
                            url: url.to_string(),
                        });
                        continue;
                    }

                    if status.as_u16() == 404 {
                        if let Some(owner) = owner_from_path(url.path()) {
                            return Err(GhError::OwnerNotFound { owner });
                        }
                    }

                    // 4xx errors or final attempt - fail immediately
                    return Err(GhError::ApiRequestFailed {
                        status: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < self.max_retries {
                        last_error = Some(e.into());
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }

        Err(last_error.unwrap_or_else(|| GhError::InvalidResponse {
            message: "Unknown error during fetch".to_string(),
        }))
    }
}

/// `Authorization` header value for a bearer token.
fn bearer(token: &str) -> String {
    format!("Bearer {}", token.trim())
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_json<T: DeserializeOwned + Send>(&self, url: &Url) -> GhResult<T> {
        let response = self.fetch_with_retry(url).await?;
        let body = response.text().await?;
        let data: T = serde_json::from_str(&body)?;
        Ok(data)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
