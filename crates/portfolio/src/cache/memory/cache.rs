//! In-memory cache implementation with TTL expiry.
//!
//! Reads take a shared lock and never mutate, so expired entries linger until
//! they are overwritten, deleted or swept.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use portfolio_core::cache::Cache;

/// A single cache entry with its expiration instant.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl CacheEntry {
    fn new(value: Vec<u8>, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    /// Returns true once the expiration instant has been reached.
    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// In-memory TTL cache.
///
/// Thread-safe cache using `Arc<RwLock<HashMap>>` for concurrent access.
/// Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    store: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let store = self.store.read().await;

        match store.get(key) {
            Some(entry) if entry.is_expired() => None,
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Duration) {
        let mut store = self.store.write().await;
        store.insert(key.to_string(), CacheEntry::new(value.to_vec(), ttl));
    }

    async fn delete(&self, key: &str) {
        let mut store = self.store.write().await;
        store.remove(key);
    }

    async fn sweep_expired(&self) -> usize {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|_, entry| !entry.is_expired());
        before - store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new();
        let key = "projects/projects.json";
        let value = b"{\"projects\":[]}";

        cache.set(key, value, LONG_TTL).await;

        assert_eq!(cache.get(key).await, Some(value.to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::new();
        assert_eq!(cache.get("missing").await, None);
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCache::new();
        let key = "skills/skills.json";

        cache.set(key, b"to be deleted", LONG_TTL).await;
        assert!(cache.get(key).await.is_some());

        cache.delete(key).await;
        assert!(cache.get(key).await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_missing_key_is_noop() {
        let cache = MemoryCache::new();
        cache.set("kept", b"1", LONG_TTL).await;

        cache.delete("missing").await;

        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value_and_ttl() {
        let cache = MemoryCache::new();
        let key = "technologies/technologies.json";

        cache.set(key, b"old", Duration::from_millis(20)).await;
        cache.set(key, b"new", LONG_TTL).await;
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.get(key).await, Some(b"new".to_vec()));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_ttl_expiration() {
        let cache = MemoryCache::new();
        let key = "short-lived";

        cache.set(key, b"value", Duration::from_millis(50)).await;
        assert!(cache.get(key).await.is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get(key).await.is_none());
        // Expired entries stay stored until swept.
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_sweep_removes_only_expired() {
        let cache = MemoryCache::new();

        for i in 0..3 {
            cache
                .set(&format!("expired:{i}"), b"x", Duration::from_millis(10))
                .await;
        }
        for i in 0..2 {
            cache.set(&format!("live:{i}"), b"y", LONG_TTL).await;
        }

        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.sweep_expired().await, 3);
        assert_eq!(cache.len().await, 2);
        assert!(cache.get("live:0").await.is_some());
        assert!(cache.get("live:1").await.is_some());
        assert_eq!(cache.sweep_expired().await, 0);
    }

    #[tokio::test]
    async fn test_zero_ttl_is_never_a_hit() {
        let cache = MemoryCache::new();

        cache.set("instant", b"v", Duration::ZERO).await;

        assert!(cache.get("instant").await.is_none());
        assert_eq!(cache.sweep_expired().await, 1);
        assert!(cache.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_readers_writers_and_sweeps() {
        let cache = MemoryCache::new();
        cache.set("stable", b"kept", LONG_TTL).await;

        let mut tasks = Vec::new();
        for worker in 0..8 {
            let cache = cache.clone();
            tasks.push(tokio::spawn(async move {
                for i in 0..50 {
                    let key = format!("worker:{worker}:{i}");
                    cache.set(&key, key.as_bytes(), LONG_TTL).await;
                    cache
                        .set(&format!("short:{worker}:{i}"), b"x", Duration::ZERO)
                        .await;
                    assert_eq!(cache.get(&key).await, Some(key.clone().into_bytes()));
                    assert_eq!(cache.get("stable").await, Some(b"kept".to_vec()));
                    if i % 10 == 0 {
                        cache.sweep_expired().await;
                    }
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }

        cache.sweep_expired().await;
        assert_eq!(cache.len().await, 8 * 50 + 1);
        assert_eq!(cache.get("worker:7:49").await, Some(b"worker:7:49".to_vec()));
    }

    #[tokio::test]
    async fn test_clones_share_store() {
        let cache = MemoryCache::new();
        let clone = cache.clone();

        clone.set("shared", b"v", LONG_TTL).await;

        assert_eq!(cache.get("shared").await, Some(b"v".to_vec()));
    }
}
