//! Cached repository snapshot for page rendering.
//!
//! The home page and the browse API read from one shared snapshot. The
//! first request after startup (or after an invalidation) fetches from the
//! source; concurrent requests wait on that same fill instead of issuing
//! their own fetch.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use folio_core::{Catalog, RepositorySource};
use tokio::sync::{Mutex, RwLock};

/// One fetched record list and the catalog derived from it.
#[derive(Debug)]
pub struct Snapshot {
    /// Tabs, groups and facets for the fetched records.
    pub catalog: Arc<Catalog>,
    /// When the fetch completed.
    pub fetched_at: DateTime<Utc>,
    /// Monotonic fill counter, starting at 1; 0 marks an unstored empty
    /// snapshot from a failed fetch.
    pub version: u64,
}

impl Snapshot {
    fn is_expired(&self, ttl: Option<Duration>, now: DateTime<Utc>) -> bool {
        ttl.and_then(|ttl| chrono::Duration::from_std(ttl).ok())
            .is_some_and(|ttl| now - self.fetched_at >= ttl)
    }
}

/// Single-slot cache in front of a [`RepositorySource`].
pub struct RecordCache {
    source: Arc<dyn RepositorySource>,
    ttl: Option<Duration>,
    slot: RwLock<Option<Arc<Snapshot>>>,
    fill: Mutex<()>,
    fills: AtomicU64,
}

impl RecordCache {
    /// Create an empty cache. With `ttl` unset, a snapshot lives until
    /// [`invalidate`](Self::invalidate) is called.
    pub fn new(source: Arc<dyn RepositorySource>, ttl: Option<Duration>) -> Self {
        Self {
            source,
            ttl,
            slot: RwLock::new(None),
            fill: Mutex::new(()),
            fills: AtomicU64::new(0),
        }
    }

    /// Current snapshot, fetching it first if the slot is empty or expired.
    ///
    /// A failed fetch yields an empty snapshot that is not stored, so the
    /// next request tries the source again.
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        if let Some(snapshot) = self.current().await {
            tracing::debug!(target: "folio.cache", version = snapshot.version, "Cache hit");
            return snapshot;
        }

        let _fill = self.fill.lock().await;
        // Another request may have filled the slot while we waited.
        if let Some(snapshot) = self.current().await {
            return snapshot;
        }

        tracing::debug!(target: "folio.cache", "Cache miss, fetching records");
        match self.source.fetch_records().await {
            Ok(records) => {
                let snapshot = Arc::new(Snapshot {
                    catalog: Arc::new(Catalog::build(records)),
                    fetched_at: Utc::now(),
                    version: self.fills.fetch_add(1, Ordering::Relaxed) + 1,
                });
                *self.slot.write().await = Some(Arc::clone(&snapshot));
                tracing::info!(
                    target: "folio.cache",
                    version = snapshot.version,
                    records = snapshot.catalog.records().len(),
                    "Cache filled"
                );
                snapshot
            }
            Err(e) => {
                tracing::warn!(
                    target: "folio.cache",
                    error = %e,
                    "Record fetch failed, rendering an empty list"
                );
                Arc::new(Snapshot {
                    catalog: Arc::new(Catalog::empty()),
                    fetched_at: Utc::now(),
                    version: 0,
                })
            }
        }
    }

    /// Drop the stored snapshot. Returns whether one was present.
    pub async fn invalidate(&self) -> bool {
        let previous = self.slot.write().await.take();
        tracing::info!(
            target: "folio.cache",
            had_snapshot = previous.is_some(),
            "Cache invalidated"
        );
        previous.is_some()
    }

    async fn current(&self) -> Option<Arc<Snapshot>> {
        self.slot
            .read()
            .await
            .as_ref()
            .filter(|snapshot| !snapshot.is_expired(self.ttl, Utc::now()))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use folio_core::{RepositoryRecord, SourceError, SourceResult};
    use mockall::mock;
    use std::sync::atomic::AtomicUsize;

    mock! {
        pub Source {}

        #[async_trait]
        impl RepositorySource for Source {
            async fn fetch_records(&self) -> SourceResult<Vec<RepositoryRecord>>;
        }
    }

    fn records() -> Vec<RepositoryRecord> {
        vec![
            RepositoryRecord::new(1, "folio", "https://github.com/octocat/folio")
                .with_created_at("2024-03-05T10:00:00Z"),
            RepositoryRecord::new(2, "older", "https://github.com/octocat/older")
                .with_created_at("2021-01-05T10:00:00Z"),
        ]
    }

    #[tokio::test]
    async fn test_snapshot_fetches_once() {
        let mut source = MockSource::new();
        source
            .expect_fetch_records()
            .times(1)
            .returning(|| Ok(records()));
        let cache = RecordCache::new(Arc::new(source), None);

        let first = cache.snapshot().await;
        let second = cache.snapshot().await;

        assert_eq!(first.version, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.catalog.records().len(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_triggers_refetch() {
        let mut source = MockSource::new();
        source
            .expect_fetch_records()
            .times(2)
            .returning(|| Ok(records()));
        let cache = RecordCache::new(Arc::new(source), None);

        let first = cache.snapshot().await;
        assert!(cache.invalidate().await);
        let second = cache.snapshot().await;

        assert_eq!(first.version, 1);
        assert_eq!(second.version, 2);
    }

    #[tokio::test]
    async fn test_invalidate_empty_cache() {
        let source = MockSource::new();
        let cache = RecordCache::new(Arc::new(source), None);
        assert!(!cache.invalidate().await);
    }

    #[tokio::test]
    async fn test_failed_fetch_yields_empty_and_is_not_stored() {
        let mut source = MockSource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_fetch_records()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(SourceError::UpstreamStatus { status: 502 }));
        source
            .expect_fetch_records()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(records()));
        let cache = RecordCache::new(Arc::new(source), None);

        let failed = cache.snapshot().await;
        assert!(failed.catalog.records().is_empty());
        assert_eq!(failed.version, 0);

        let recovered = cache.snapshot().await;
        assert_eq!(recovered.catalog.records().len(), 2);
        assert_eq!(recovered.version, 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_always_refetches() {
        let mut source = MockSource::new();
        source
            .expect_fetch_records()
            .times(2)
            .returning(|| Ok(records()));
        let cache = RecordCache::new(Arc::new(source), Some(Duration::ZERO));

        cache.snapshot().await;
        let second = cache.snapshot().await;
        assert_eq!(second.version, 2);
    }

    #[test]
    fn test_snapshot_expiry() {
        let now = Utc::now();
        let snapshot = Snapshot {
            catalog: Arc::new(Catalog::empty()),
            fetched_at: now - chrono::Duration::seconds(120),
            version: 1,
        };
        assert!(!snapshot.is_expired(None, now));
        assert!(!snapshot.is_expired(Some(Duration::from_secs(300)), now));
        assert!(snapshot.is_expired(Some(Duration::from_secs(60)), now));
    }

    struct SlowSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RepositorySource for SlowSource {
        async fn fetch_records(&self) -> SourceResult<Vec<RepositoryRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;
            Ok(records())
        }
    }

    #[tokio::test]
    async fn test_concurrent_loads_share_one_fill() {
        let source = Arc::new(SlowSource {
            calls: AtomicUsize::new(0),
        });
        let cache = RecordCache::new(source.clone(), None);

        let (a, b, c) = tokio::join!(cache.snapshot(), cache.snapshot(), cache.snapshot());

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&b, &c));
    }
}
