//! Shared fixtures for folio-axum integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use folio_axum::bootstrap::{AxumContext, CorsConfig, ServerConfig};
use folio_axum::routes::create_router;
use folio_core::{RepositoryRecord, RepositorySource, SourceError, SourceResult};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Secret used by revalidation tests.
pub const TEST_SECRET: &str = "test-secret";

/// A dated record with a language.
pub fn record(id: u64, name: &str, language: Option<&str>, created_at: &str) -> RepositoryRecord {
    let mut record = RepositoryRecord::new(id, name, format!("https://github.com/octocat/{name}"))
        .with_created_at(created_at);
    if let Some(language) = language {
        record = record.with_language(language);
    }
    record
}

/// Ten records in 2024, two in 2023, one in 2019 and one undated.
pub fn sample_records() -> Vec<RepositoryRecord> {
    let mut records: Vec<RepositoryRecord> = (0..10)
        .map(|i| {
            record(
                i,
                &format!("project-{i}"),
                Some(if i % 2 == 0 { "Rust" } else { "TypeScript" }),
                &format!("2024-{:02}-15T12:00:00Z", 12 - i),
            )
        })
        .collect();
    records.push(record(20, "Api-Client", Some("Go"), "2023-05-01T12:00:00Z"));
    records.push(record(21, "legacy", None, "2023-02-01T12:00:00Z"));
    records.push(record(30, "ancient", Some("C"), "2019-07-01T12:00:00Z"));
    records.push(RepositoryRecord::new(40, "undated", "https://github.com/octocat/undated"));
    records
}

/// Source that counts fetches and returns a fixed list.
pub struct CountingSource {
    records: Vec<RepositoryRecord>,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(records: Vec<RepositoryRecord>) -> Self {
        Self {
            records,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepositorySource for CountingSource {
    async fn fetch_records(&self) -> SourceResult<Vec<RepositoryRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.records.clone())
    }
}

/// Source whose upstream always fails.
pub struct FailingSource;

#[async_trait]
impl RepositorySource for FailingSource {
    async fn fetch_records(&self) -> SourceResult<Vec<RepositoryRecord>> {
        Err(SourceError::UpstreamStatus { status: 503 })
    }
}

/// Config with a revalidation secret and no upstream owner.
pub fn test_config() -> ServerConfig {
    ServerConfig::with_defaults().with_revalidate_secret(TEST_SECRET)
}

/// Router over an arbitrary source.
pub fn app_with_source(source: Arc<dyn RepositorySource>) -> Router {
    let config = test_config();
    create_router(AxumContext::new(source, &config), &CorsConfig::AllowAll)
}

/// Router over the sample records.
pub fn app() -> Router {
    app_with_source(Arc::new(CountingSource::new(sample_records())))
}

/// Send one request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

/// GET a path.
pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

/// Collect a response body as UTF-8.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
