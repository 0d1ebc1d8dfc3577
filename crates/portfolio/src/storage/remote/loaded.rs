use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

/// A parsed top-level document kept for the life of a repository.
///
/// `initialized` is set only after a successful load and cleared on refresh.
pub struct LoadedDocument<T> {
    value: RwLock<Option<Arc<T>>>,
    initialized: AtomicBool,
}

impl<T> Default for LoadedDocument<T> {
    fn default() -> Self {
        Self {
            value: RwLock::new(None),
            initialized: AtomicBool::new(false),
        }
    }
}

impl<T> LoadedDocument<T> {
    /// Returns the document if a load has completed.
    pub async fn get(&self) -> Option<Arc<T>> {
        if !self.is_initialized() {
            return None;
        }
        self.value.read().await.clone()
    }

    /// Stores a freshly loaded document and marks it initialized.
    pub async fn store(&self, value: T) -> Arc<T> {
        let value = Arc::new(value);
        *self.value.write().await = Some(value.clone());
        self.initialized.store(true, Ordering::Release);
        value
    }

    /// Forgets the document so the next read loads it again.
    pub async fn clear(&self) {
        self.initialized.store(false, Ordering::Release);
        *self.value.write().await = None;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_store_get_clear() {
        let loaded = LoadedDocument::<Vec<u32>>::default();
        assert!(loaded.get().await.is_none());
        assert!(!loaded.is_initialized());

        loaded.store(vec![1, 2]).await;
        assert!(loaded.is_initialized());
        assert_eq!(loaded.get().await.as_deref(), Some(&vec![1, 2]));

        loaded.clear().await;
        assert!(!loaded.is_initialized());
        assert!(loaded.get().await.is_none());
    }
}
