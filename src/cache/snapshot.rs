use crate::domain::models::Snapshot;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

struct CachedSnapshot {
    snapshot: Arc<Snapshot>,
    fetched_at: Instant,
}

/// Owned single-snapshot cache with a freshness window.
///
/// Replacement is atomic: readers always see either the previous complete
/// snapshot or the new one, never a partial update. The lock is only held
/// for the copy of an `Arc`, never across a fetch.
pub struct SnapshotCache {
    entry: RwLock<Option<CachedSnapshot>>,
    ttl: Duration,
}

impl SnapshotCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    /// Get the cached snapshot if it is within the freshness window
    pub async fn fresh(&self) -> Option<Arc<Snapshot>> {
        let guard = self.entry.read().await;
        guard.as_ref().and_then(|entry| {
            if entry.fetched_at.elapsed() <= self.ttl {
                Some(Arc::clone(&entry.snapshot))
            } else {
                None
            }
        })
    }

    /// Get the cached snapshot regardless of age, for stale fallback
    pub async fn any(&self) -> Option<Arc<Snapshot>> {
        let guard = self.entry.read().await;
        guard.as_ref().map(|entry| Arc::clone(&entry.snapshot))
    }

    /// Replace the cached snapshot and restart its freshness window
    pub async fn store(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snapshot = Arc::new(snapshot);
        let mut guard = self.entry.write().await;
        *guard = Some(CachedSnapshot {
            snapshot: Arc::clone(&snapshot),
            fetched_at: Instant::now(),
        });
        snapshot
    }
}
