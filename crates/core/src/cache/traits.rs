use std::time::Duration;

use async_trait::async_trait;

/// Trait for TTL cache operations.
///
/// Cache operations never fail: a miss is a value (`None`), not an error.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value by key. Expired entries are reported as misses but are
    /// left in place until [`Cache::sweep_expired`] or [`Cache::delete`].
    async fn get(&self, key: &str) -> Option<Vec<u8>>;

    /// Inserts or overwrites a value that expires after `ttl`.
    async fn set(&self, key: &str, value: &[u8], ttl: Duration);

    /// Removes a value by key.
    async fn delete(&self, key: &str);

    /// Removes every expired entry and returns how many were removed.
    async fn sweep_expired(&self) -> usize;
}
