//! Canned content fetcher for repository tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use portfolio_core::content::ContentFetcher;
use portfolio_core::storage::{RepositoryError, Result};

/// Serves canned responses per path and counts calls per path.
///
/// Unknown paths fail with a 404 upstream status.
#[derive(Default)]
pub struct MockFetcher {
    responses: Mutex<HashMap<String, Result<String>>>,
    calls: Mutex<HashMap<String, usize>>,
    delay: Option<Duration>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, path: &str, body: &str) -> Self {
        self.set(path, Ok(body.to_string()));
        self
    }

    pub fn with_error(self, path: &str, error: RepositoryError) -> Self {
        self.set(path, Err(error));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Replaces the response for a path.
    pub fn set(&self, path: &str, response: Result<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
    }

    /// Number of fetches made for a path.
    pub fn calls(&self, path: &str) -> usize {
        self.calls.lock().unwrap().get(path).copied().unwrap_or(0)
    }

    async fn respond(&self, path: &str) -> Result<String> {
        *self
            .calls
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_insert(0) += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(RepositoryError::upstream(404, "Not Found")))
    }
}

#[async_trait]
impl ContentFetcher for MockFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        self.respond(path).await
    }

    async fn fetch_binary(&self, path: &str) -> Result<String> {
        self.respond(path).await
    }
}
