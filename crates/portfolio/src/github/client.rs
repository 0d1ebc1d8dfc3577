//! HTTP client for the GitHub contents API.

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};

use portfolio_core::content::{decode_text, normalize_base64, ContentEnvelope, ContentFetcher};
use portfolio_core::storage::{RepositoryError, Result};

use crate::config::GitHubConfig;

const ACCEPT: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("portfolio-website/", env!("CARGO_PKG_VERSION"));

/// Stateless fetcher for files in a single GitHub repository.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repository: String,
}

impl GitHubClient {
    /// Creates a client authenticated with the configured token.
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| RepositoryError::Transport(format!("invalid token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        tracing::info!(
            base_url = %config.base_url,
            owner = %config.owner,
            repository = %config.repository,
            timeout_secs = config.timeout_seconds,
            "Initialized GitHub content client"
        );

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            owner: config.owner.clone(),
            repository: config.repository.clone(),
        })
    }

    /// Build the contents URL for a file path.
    fn url(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url,
            self.owner,
            self.repository,
            path.trim_start_matches('/')
        )
    }

    /// Fetches the JSON envelope for a file.
    async fn fetch_envelope(&self, path: &str) -> Result<ContentEnvelope> {
        let url = self.url(path);
        tracing::trace!(%url, "Fetching content");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RepositoryError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!(path, status = status.as_u16(), "Upstream returned an error");
            return Err(RepositoryError::upstream(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| RepositoryError::Decode(format!("invalid content envelope: {e}")))
    }
}

#[async_trait]
impl ContentFetcher for GitHubClient {
    async fn fetch_text(&self, path: &str) -> Result<String> {
        let envelope = self.fetch_envelope(path).await?;
        decode_text(&envelope)
    }

    async fn fetch_binary(&self, path: &str) -> Result<String> {
        let envelope = self.fetch_envelope(path).await?;
        normalize_base64(&envelope)
    }
}
