//! Read-through access to remote content.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use portfolio_core::cache::Cache;
use portfolio_core::content::ContentFetcher;
use portfolio_core::storage::{RepositoryError, Result};

/// Pairs a content fetcher with a TTL cache keyed by resource path.
///
/// Only content that was fetched and parsed successfully is cached, so a
/// malformed document is refetched on the next read.
#[derive(Clone)]
pub struct ContentStore {
    fetcher: Arc<dyn ContentFetcher>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl ContentStore {
    pub fn new(fetcher: Arc<dyn ContentFetcher>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self {
            fetcher,
            cache,
            ttl,
        }
    }

    /// Loads and parses a JSON document.
    pub async fn load_document<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        if let Some(bytes) = self.cache.get(path).await {
            match serde_json::from_slice(&bytes) {
                Ok(document) => {
                    tracing::trace!(path, "Cache hit for document");
                    return Ok(document);
                }
                Err(err) => {
                    tracing::warn!(path, error = %err, "Cached document failed to parse");
                }
            }
        }

        tracing::trace!(path, "Cache miss for document");
        let text = self.fetcher.fetch_text(path).await?;
        let document = serde_json::from_str(&text).map_err(|e| RepositoryError::Parse {
            path: path.to_string(),
            message: e.to_string(),
        })?;

        self.cache.set(path, text.as_bytes(), self.ttl).await;
        Ok(document)
    }

    /// Loads a UTF-8 text file.
    pub async fn load_text(&self, path: &str) -> Result<String> {
        if let Some(text) = self.cached_string(path).await {
            return Ok(text);
        }

        let text = self.fetcher.fetch_text(path).await?;
        self.cache.set(path, text.as_bytes(), self.ttl).await;
        Ok(text)
    }

    /// Loads a binary file as its base64 body.
    pub async fn load_binary(&self, path: &str) -> Result<String> {
        if let Some(body) = self.cached_string(path).await {
            return Ok(body);
        }

        let body = self.fetcher.fetch_binary(path).await?;
        self.cache.set(path, body.as_bytes(), self.ttl).await;
        Ok(body)
    }

    /// Returns the raw cached bytes for a path, if any.
    pub async fn peek(&self, path: &str) -> Option<Vec<u8>> {
        self.cache.get(path).await
    }

    /// Drops the cached entry for a path.
    pub async fn invalidate(&self, path: &str) {
        tracing::trace!(path, "Invalidating cached content");
        self.cache.delete(path).await;
    }

    async fn cached_string(&self, path: &str) -> Option<String> {
        let bytes = self.cache.get(path).await?;
        match String::from_utf8(bytes) {
            Ok(text) => {
                tracing::trace!(path, "Cache hit for content");
                Some(text)
            }
            Err(err) => {
                tracing::warn!(path, error = %err, "Cached content is not valid UTF-8");
                None
            }
        }
    }
}
