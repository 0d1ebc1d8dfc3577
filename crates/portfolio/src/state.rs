//! Application state shared by all request handlers.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::cache::{spawn_sweeper, MemoryCache};
use crate::config::Config;
use crate::github::GitHubClient;
use crate::service::PortfolioService;
use crate::storage::inmemory::{
    InMemoryProjectRepository, InMemorySkillRepository, InMemoryTechnologyRepository,
};
use crate::storage::remote::RemoteRepositories;

/// Where portfolio data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    GitHub,
    Memory,
}

impl ContentSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GitHub => "github",
            Self::Memory => "memory",
        }
    }
}

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Facade over the active repositories.
    pub service: PortfolioService,
    /// Public base URL of the site, without a trailing slash.
    pub site_url: String,
    pub source: ContentSource,
    /// Content cache. `None` for the in-memory backend.
    cache: Option<Arc<MemoryCache>>,
    /// Shutdown signal sender for background tasks.
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    fn build(
        service: PortfolioService,
        source: ContentSource,
        cache: Option<Arc<MemoryCache>>,
        site_url: &str,
    ) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);

        Self {
            service,
            site_url: site_url.trim_end_matches('/').to_string(),
            source,
            cache,
            shutdown_tx,
        }
    }

    /// Creates AppState from configuration.
    ///
    /// A configured token selects the GitHub-backed repositories, whose
    /// pre-warm tasks start here. Otherwise the static demo data is served.
    pub fn from_config(config: &Config) -> Result<Self, anyhow::Error> {
        if !config.github.is_remote() {
            tracing::info!("No GitHub token configured, serving demo data");
            return Ok(Self::with_demo_data(&config.site_url));
        }

        let client = Arc::new(GitHubClient::new(&config.github)?);
        let cache = Arc::new(MemoryCache::new());
        let repositories = RemoteRepositories::new(client, cache.clone(), config.cache_ttl());

        let service = PortfolioService::new(
            repositories.projects,
            repositories.skills,
            repositories.technologies,
        );

        tracing::info!(
            owner = %config.github.owner,
            repository = %config.github.repository,
            cache_ttl_secs = config.cache_ttl_seconds,
            "Serving content from GitHub"
        );

        Ok(Self::build(
            service,
            ContentSource::GitHub,
            Some(cache),
            &config.site_url,
        ))
    }

    /// Creates AppState over the static demo data.
    pub fn with_demo_data(site_url: &str) -> Self {
        let technologies = Arc::new(InMemoryTechnologyRepository::default());
        let skills = Arc::new(InMemorySkillRepository::from_technologies(&technologies));
        let projects = Arc::new(InMemoryProjectRepository::demo(technologies.clone()));

        let service = PortfolioService::new(projects, skills, technologies);
        Self::build(service, ContentSource::Memory, None, site_url)
    }

    /// Starts the periodic sweep of expired cache entries.
    ///
    /// Returns `None` when there is no cache to sweep.
    pub fn spawn_cache_sweeper(&self, interval: Duration) -> Option<JoinHandle<()>> {
        let cache = self.cache.clone()?;
        Some(spawn_sweeper(cache, interval, self.subscribe_shutdown()))
    }

    /// Subscribe to shutdown signal.
    pub fn subscribe_shutdown(&self) -> broadcast::Receiver<()> {
        self.shutdown_tx.subscribe()
    }

    /// Signal all background tasks to shut down.
    pub fn signal_shutdown(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_demo_data(&Config::default().site_url)
    }
}
