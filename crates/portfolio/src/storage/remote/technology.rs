//! Technology repository backed by the content repository.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use portfolio_core::cache::TECHNOLOGIES_DOCUMENT;
use portfolio_core::portfolio::{select_technologies, TechnologiesDocument, Technology};
use portfolio_core::storage::{RepositoryError, Result, TechnologyRepository};

use super::content::ContentStore;
use super::loaded::LoadedDocument;
use super::prewarm::Prewarm;

/// Reads `technologies/technologies.json` once and keeps the parsed
/// dictionary until [`TechnologyRepository::refresh`].
pub struct RemoteTechnologyRepository {
    store: ContentStore,
    technologies: LoadedDocument<HashMap<String, Technology>>,
}

impl RemoteTechnologyRepository {
    pub fn new(store: ContentStore) -> Self {
        Self {
            store,
            technologies: LoadedDocument::default(),
        }
    }

    async fn dictionary(&self) -> Result<Arc<HashMap<String, Technology>>> {
        if let Some(technologies) = self.technologies.get().await {
            return Ok(technologies);
        }
        self.load().await
    }

    async fn load(&self) -> Result<Arc<HashMap<String, Technology>>> {
        let document: TechnologiesDocument =
            self.store.load_document(TECHNOLOGIES_DOCUMENT).await?;

        tracing::debug!(
            count = document.technologies.len(),
            "Loaded technology dictionary"
        );
        Ok(self.technologies.store(document.technologies).await)
    }
}

#[async_trait]
impl TechnologyRepository for RemoteTechnologyRepository {
    async fn get_technology(&self, name: &str) -> Result<Technology> {
        self.dictionary()
            .await?
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Technology",
                id: name.to_string(),
            })
    }

    async fn get_technologies(&self, names: &[String]) -> Vec<Technology> {
        match self.dictionary().await {
            Ok(technologies) => {
                let selected = select_technologies(&technologies, names);
                let dropped = names.len() - selected.len();
                if dropped > 0 {
                    tracing::debug!(dropped, "Skipped unknown technology names");
                }
                selected
            }
            Err(err) => {
                tracing::warn!(error = %err, "Technology dictionary unavailable");
                Vec::new()
            }
        }
    }

    async fn get_all_technologies(&self) -> Result<HashMap<String, Technology>> {
        Ok(self.dictionary().await?.as_ref().clone())
    }

    async fn refresh(&self) -> Result<()> {
        self.technologies.clear().await;
        self.store.invalidate(TECHNOLOGIES_DOCUMENT).await;
        self.load().await.map(|_| ())
    }
}

#[async_trait]
impl Prewarm for RemoteTechnologyRepository {
    fn name(&self) -> &'static str {
        "technologies"
    }

    async fn warm(&self) -> Result<()> {
        self.load().await.map(|_| ())
    }

    fn is_initialized(&self) -> bool {
        self.technologies.is_initialized()
    }
}
