//! Process-wide registry of shared [`crate::db::DatabaseClient`] instances
//! (spec.md §9 "Global pool", SPEC_FULL.md §4.10, D2). Grounded on
//! `session_pool::SessionManager` being itself a reference-counted,
//! process-shared manager, and on `foundation/metadata`'s `OnceCell`-backed
//! global registry (`static ON_GCE: OnceCell<bool>`) for the lazy-static
//! shape.
//!
//! A `ConnectionController` never owns a `DatabaseClient` outright in
//! production: it acquires one keyed by `(database, config)` from here, and
//! releases it on `close`. The last release for a key drops the client.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::OnceCell;

use crate::db::DatabaseClient;

/// Identifies one shared client: the target database plus a fingerprint of
/// whatever client configuration would otherwise produce a distinct
/// connection (channel count, session pool bounds, ...). The fingerprint is
/// opaque to this module; callers derive it however their `ClientConfig`
/// analogue sees fit.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PoolKey {
    pub database: String,
    pub config_fingerprint: String,
}

impl PoolKey {
    pub fn new(database: impl Into<String>, config_fingerprint: impl Into<String>) -> Self {
        PoolKey {
            database: database.into(),
            config_fingerprint: config_fingerprint.into(),
        }
    }
}

struct Entry {
    client: Arc<dyn DatabaseClient>,
    owners: HashSet<String>,
}

static REGISTRY: OnceCell<Mutex<HashMap<PoolKey, Entry>>> = OnceCell::const_new();

async fn registry() -> &'static Mutex<HashMap<PoolKey, Entry>> {
    REGISTRY.get_or_init(|| async { Mutex::new(HashMap::new()) }).await
}

/// The process-wide pool. Stateless by design — all state lives in the
/// `REGISTRY` static, the same "one shared thing regardless of how many
/// `SpannerPool` values exist" shape as `SessionManager`.
#[derive(Default)]
pub struct SpannerPool;

impl SpannerPool {
    /// Returns the client shared by every other connection on `key`,
    /// building a fresh one via `build` the first time `key` is seen.
    /// `owner` identifies the caller for reference counting; a distinct
    /// connection should pass a distinct owner (its own id is sufficient).
    pub async fn acquire<F>(key: &PoolKey, owner: impl Into<String>, build: F) -> Arc<dyn DatabaseClient>
    where
        F: FnOnce() -> Arc<dyn DatabaseClient>,
    {
        let owner = owner.into();
        let registry = registry().await;
        let mut guard = registry.lock();
        let entry = guard.entry(key.clone()).or_insert_with(|| {
            tracing::debug!(database = %key.database, "opening shared database client");
            Entry {
                client: build(),
                owners: HashSet::new(),
            }
        });
        entry.owners.insert(owner);
        entry.client.clone()
    }

    /// Drops `owner`'s reference to `key`. Once no owners remain the client
    /// is removed from the registry and, since nothing else holds the
    /// `Arc`, dropped.
    pub async fn release(key: &PoolKey, owner: &str) {
        let registry = registry().await;
        let mut guard = registry.lock();
        if let Some(entry) = guard.get_mut(key) {
            entry.owners.remove(owner);
            if entry.owners.is_empty() {
                tracing::debug!(database = %key.database, "closing shared database client: no owners remain");
                guard.remove(key);
            }
        }
    }

    pub async fn owner_count(key: &PoolKey) -> usize {
        registry().await.lock().get(key).map(|e| e.owners.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::MockDatabaseClient;

    fn key(name: &str) -> PoolKey {
        PoolKey::new(name, "default")
    }

    #[tokio::test]
    async fn acquire_reuses_the_same_client_for_the_same_key() {
        let k = key("acquire_reuses_the_same_client_for_the_same_key");
        let a = SpannerPool::acquire(&k, "conn-a", || Arc::new(MockDatabaseClient::default())).await;
        let b = SpannerPool::acquire(&k, "conn-b", || Arc::new(MockDatabaseClient::default())).await;
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(SpannerPool::owner_count(&k).await, 2);
        SpannerPool::release(&k, "conn-a").await;
        SpannerPool::release(&k, "conn-b").await;
    }

    #[tokio::test]
    async fn release_removes_the_entry_once_all_owners_are_gone() {
        let k = key("release_removes_the_entry_once_all_owners_are_gone");
        SpannerPool::acquire(&k, "only-owner", || Arc::new(MockDatabaseClient::default())).await;
        assert_eq!(SpannerPool::owner_count(&k).await, 1);
        SpannerPool::release(&k, "only-owner").await;
        assert_eq!(SpannerPool::owner_count(&k).await, 0);
    }
}
