//! Storage backend reading JSON documents from a GitHub content repository.
//!
//! All three repositories share one [`ContentStore`], so every remote file is
//! cached once under its resource path. Constructing the repositories through
//! [`RemoteRepositories::new`] starts one pre-warm task per repository.

mod content;
mod loaded;
mod prewarm;
mod project;
mod skill;
mod technology;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;
use std::time::Duration;

use portfolio_core::cache::Cache;
use portfolio_core::content::ContentFetcher;

pub use content::ContentStore;
pub use prewarm::{spawn_prewarm, spawn_prewarm_after, Prewarm};
pub use project::RemoteProjectRepository;
pub use skill::RemoteSkillRepository;
pub use technology::RemoteTechnologyRepository;

/// The remote repositories, wired to a shared content store.
#[derive(Clone)]
pub struct RemoteRepositories {
    pub technologies: Arc<RemoteTechnologyRepository>,
    pub skills: Arc<RemoteSkillRepository>,
    pub projects: Arc<RemoteProjectRepository>,
}

impl RemoteRepositories {
    /// Builds the repositories and spawns their pre-warm tasks.
    ///
    /// Returns without waiting for the warm-up. Projects warm after
    /// technologies, since resolving a project reads the technology table.
    pub fn new(fetcher: Arc<dyn ContentFetcher>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        let store = ContentStore::new(fetcher, cache, ttl);

        let technologies = Arc::new(RemoteTechnologyRepository::new(store.clone()));
        let skills = Arc::new(RemoteSkillRepository::new(store.clone()));
        let projects = Arc::new(RemoteProjectRepository::new(store, technologies.clone()));

        let technologies_warm = spawn_prewarm(technologies.clone());
        spawn_prewarm(skills.clone());
        spawn_prewarm_after(technologies_warm, projects.clone());

        Self {
            technologies,
            skills,
            projects,
        }
    }
}
