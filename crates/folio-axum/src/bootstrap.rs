//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter. The repository source is chosen here and injected
//! into the handlers through [`AxumContext`].

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use folio_core::{RepositorySource, StaticRepositorySource};
use folio_github::{DefaultGithubClient, GithubClientConfig};

use crate::cache::RecordCache;
use crate::page::SiteConfig;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 3000;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// GitHub account whose repositories are shown.
    pub github_owner: Option<String>,
    /// Optional GitHub bearer token.
    pub github_token: Option<String>,
    /// Shared secret for `POST /api/revalidate`; unset rejects every call.
    pub revalidate_secret: Option<String>,
    /// Page title and biography.
    pub site: SiteConfig,
    /// Snapshot lifetime; `None` keeps it until invalidated.
    pub cache_ttl: Option<Duration>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default values and no upstream owner.
    pub fn with_defaults() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            github_owner: None,
            github_token: None,
            revalidate_secret: None,
            site: SiteConfig::default(),
            cache_ttl: None,
            cors: CorsConfig::default(),
        }
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through a variable lookup function.
    ///
    /// Blank values are treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::with_defaults();

        let port = var("PORT")
            .map(|raw| {
                raw.trim()
                    .parse::<u16>()
                    .with_context(|| format!("PORT must be a port number, got {raw:?}"))
            })
            .transpose()?
            .unwrap_or(defaults.port);

        let cache_ttl = var("FOLIO_CACHE_TTL_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| {
                        format!("FOLIO_CACHE_TTL_SECS must be a number of seconds, got {raw:?}")
                    })
            })
            .transpose()?;

        let cors = var("FOLIO_CORS_ORIGINS").map_or(CorsConfig::AllowAll, |raw| {
            CorsConfig::AllowOrigins(
                raw.split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
        });

        Ok(Self {
            host: var("FOLIO_HOST").unwrap_or(defaults.host),
            port,
            github_owner: var("GITHUB_USERNAME").map(|o| o.trim().to_string()),
            github_token: var("GITHUB_TOKEN"),
            revalidate_secret: var("REVALIDATE_SECRET"),
            site: SiteConfig {
                title: var("FOLIO_TITLE").unwrap_or(defaults.site.title),
                bio: var("FOLIO_BIO").unwrap_or(defaults.site.bio),
            },
            cache_ttl,
            cors,
        })
    }

    /// Set the upstream owner.
    #[must_use]
    pub fn with_github_owner(mut self, owner: impl Into<String>) -> Self {
        self.github_owner = Some(owner.into());
        self
    }

    /// Set the revalidation secret.
    #[must_use]
    pub fn with_revalidate_secret(mut self, secret: impl Into<String>) -> Self {
        self.revalidate_secret = Some(secret.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
///
/// Holds the repository source, the snapshot cache in front of it and the
/// static page content.
pub struct AxumContext {
    /// Upstream record source, used uncached by `/api/github`.
    pub source: Arc<dyn RepositorySource>,
    /// Snapshot cache used by the page and browse API.
    pub cache: RecordCache,
    /// Page title and biography.
    pub site: SiteConfig,
    /// Shared secret for cache invalidation.
    pub revalidate_secret: Option<String>,
}

impl AxumContext {
    /// Wire a context around an already constructed source.
    pub fn new(source: Arc<dyn RepositorySource>, config: &ServerConfig) -> Self {
        Self {
            cache: RecordCache::new(Arc::clone(&source), config.cache_ttl),
            source,
            site: config.site.clone(),
            revalidate_secret: config.revalidate_secret.clone(),
        }
    }
}

/// Bootstrap the server context.
///
/// Uses the GitHub client when an owner is configured and an empty
/// in-memory source otherwise.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let source: Arc<dyn RepositorySource> = match config.github_owner.as_deref() {
        Some(owner) => {
            let client_config = GithubClientConfig::new(owner)
                .with_optional_token(config.github_token.clone());
            let client = DefaultGithubClient::new(&client_config)
                .context("Failed to create GitHub client")?;
            tracing::info!(
                target: "folio.bootstrap",
                owner = client.owner(),
                authenticated = config.github_token.is_some(),
                "Using GitHub repository source"
            );
            Arc::new(client)
        }
        None => {
            tracing::warn!(
                target: "folio.bootstrap",
                "GITHUB_USERNAME is not set; the project list will be empty"
            );
            Arc::new(StaticRepositorySource::empty())
        }
    };

    if config.revalidate_secret.is_none() {
        tracing::warn!(
            target: "folio.bootstrap",
            "REVALIDATE_SECRET is not set; cache invalidation requests will be rejected"
        );
    }

    Ok(AxumContext::new(source, config))
}

/// Start the web server.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!(
        target: "folio.server",
        cache_ttl_secs = config.cache_ttl.map(|ttl| ttl.as_secs()),
        "folio web server listening on http://{}",
        addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
