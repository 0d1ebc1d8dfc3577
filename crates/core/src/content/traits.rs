use async_trait::async_trait;

use crate::storage::Result;

/// Fetches files from a remote content repository.
///
/// Implementations are stateless; caching is the caller's concern.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    /// Fetches a file and returns its decoded UTF-8 text.
    async fn fetch_text(&self, path: &str) -> Result<String>;

    /// Fetches a file and returns its base64 body with whitespace removed.
    async fn fetch_binary(&self, path: &str) -> Result<String>;
}
