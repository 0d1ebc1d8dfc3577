use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use portfolio_core::cache::Cache;

/// Spawns a task that purges expired entries every `interval`.
///
/// The task stops when `shutdown_rx` receives a value or its sender is dropped.
pub fn spawn_sweeper(
    cache: Arc<dyn Cache>,
    interval: Duration,
    mut shutdown_rx: broadcast::Receiver<()>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately.
        ticker.tick().await;

        tracing::debug!(interval_secs = interval.as_secs(), "Cache sweeper started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = cache.sweep_expired().await;
                    if removed > 0 {
                        tracing::debug!(removed, "Swept expired cache entries");
                    }
                }
                _ = shutdown_rx.recv() => {
                    tracing::debug!("Cache sweeper shutting down");
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::MemoryCache;

    #[tokio::test]
    async fn test_sweeper_purges_expired_entries() {
        let cache = MemoryCache::new();
        cache.set("gone", b"x", Duration::from_millis(5)).await;
        cache.set("kept", b"y", Duration::from_secs(60)).await;

        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
        let handle = spawn_sweeper(
            Arc::new(cache.clone()),
            Duration::from_millis(20),
            shutdown_rx,
        );

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(cache.len().await, 1);
        assert!(cache.get("kept").await.is_some());

        shutdown_tx.send(()).unwrap();
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_sweeper_stops_when_sender_dropped() {
        let (shutdown_tx, shutdown_rx) = broadcast::channel::<()>(1);
        let handle = spawn_sweeper(
            Arc::new(MemoryCache::new()),
            Duration::from_secs(3600),
            shutdown_rx,
        );

        drop(shutdown_tx);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("sweeper did not stop")
            .unwrap();
    }
}
