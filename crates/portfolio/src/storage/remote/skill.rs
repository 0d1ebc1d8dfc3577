//! Skill repository backed by the content repository.

use std::sync::Arc;

use async_trait::async_trait;

use portfolio_core::cache::SKILLS_DOCUMENT;
use portfolio_core::portfolio::{SkillCategory, SkillsDocument};
use portfolio_core::storage::{Result, SkillRepository};

use super::content::ContentStore;
use super::loaded::LoadedDocument;
use super::prewarm::Prewarm;

/// Reads `skills/skills.json` once and keeps the parsed categories until
/// [`SkillRepository::refresh`].
pub struct RemoteSkillRepository {
    store: ContentStore,
    categories: LoadedDocument<Vec<SkillCategory>>,
}

impl RemoteSkillRepository {
    pub fn new(store: ContentStore) -> Self {
        Self {
            store,
            categories: LoadedDocument::default(),
        }
    }

    async fn load(&self) -> Result<Arc<Vec<SkillCategory>>> {
        let document: SkillsDocument = self.store.load_document(SKILLS_DOCUMENT).await?;

        tracing::debug!(
            count = document.skill_categories.len(),
            "Loaded skill categories"
        );
        Ok(self.categories.store(document.skill_categories).await)
    }
}

#[async_trait]
impl SkillRepository for RemoteSkillRepository {
    async fn get_skill_categories(&self) -> Result<Vec<SkillCategory>> {
        let categories = match self.categories.get().await {
            Some(categories) => categories,
            None => self.load().await?,
        };
        Ok(categories.as_ref().clone())
    }

    async fn refresh(&self) -> Result<()> {
        self.categories.clear().await;
        self.store.invalidate(SKILLS_DOCUMENT).await;
        self.load().await.map(|_| ())
    }
}

#[async_trait]
impl Prewarm for RemoteSkillRepository {
    fn name(&self) -> &'static str {
        "skills"
    }

    async fn warm(&self) -> Result<()> {
        self.load().await.map(|_| ())
    }

    fn is_initialized(&self) -> bool {
        self.categories.is_initialized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use portfolio_core::cache::Cache;
    use portfolio_core::storage::RepositoryError;

    use crate::cache::MemoryCache;
    use crate::storage::remote::testing::MockFetcher;

    const SKILLS: &str = r#"{
        "skill_categories": [
            {
                "category": "Languages",
                "skills": [
                    {"name": "Go", "icon": "go.svg", "category": "Languages"},
                    {"name": "Python", "icon": "python.svg"}
                ]
            },
            {"category": "Monitoring", "skills": []}
        ]
    }"#;

    fn repository(fetcher: &Arc<MockFetcher>, cache: &Arc<MemoryCache>) -> RemoteSkillRepository {
        let store = ContentStore::new(fetcher.clone(), cache.clone(), Duration::from_secs(60));
        RemoteSkillRepository::new(store)
    }

    #[tokio::test]
    async fn test_get_skill_categories() {
        let fetcher = Arc::new(MockFetcher::new().with_text(SKILLS_DOCUMENT, SKILLS));
        let repo = repository(&fetcher, &Arc::new(MemoryCache::new()));

        let categories = repo.get_skill_categories().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].category, "Languages");
        assert_eq!(categories[0].skills[1].name, "Python");
        assert_eq!(categories[0].skills[1].icon_url, "python.svg");
        assert_eq!(categories[0].skills[1].category, "");
        assert!(categories[1].skills.is_empty());
    }

    #[tokio::test]
    async fn test_two_reads_make_one_upstream_call() {
        let fetcher = Arc::new(MockFetcher::new().with_text(SKILLS_DOCUMENT, SKILLS));
        let repo = repository(&fetcher, &Arc::new(MemoryCache::new()));

        let first = repo.get_skill_categories().await.unwrap();
        let second = repo.get_skill_categories().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(fetcher.calls(SKILLS_DOCUMENT), 1);
    }

    #[tokio::test]
    async fn test_unsupported_encoding_fails_and_is_not_cached() {
        let fetcher = Arc::new(MockFetcher::new().with_error(
            SKILLS_DOCUMENT,
            RepositoryError::Decode("unsupported encoding: utf-8".to_string()),
        ));
        let cache = Arc::new(MemoryCache::new());
        let repo = repository(&fetcher, &cache);

        let err = repo.get_skill_categories().await.unwrap_err();

        assert!(matches!(err, RepositoryError::Decode(_)));
        assert!(cache.get(SKILLS_DOCUMENT).await.is_none());
        assert!(!repo.is_initialized());
    }

    #[tokio::test]
    async fn test_malformed_document_is_parse_error() {
        let fetcher = Arc::new(
            MockFetcher::new().with_text(SKILLS_DOCUMENT, r#"{"skill_categories": "nope"}"#),
        );
        let cache = Arc::new(MemoryCache::new());
        let repo = repository(&fetcher, &cache);

        let err = repo.get_skill_categories().await.unwrap_err();

        assert!(matches!(err, RepositoryError::Parse { .. }));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_refresh_refetches() {
        let fetcher = Arc::new(MockFetcher::new().with_text(SKILLS_DOCUMENT, SKILLS));
        let repo = repository(&fetcher, &Arc::new(MemoryCache::new()));
        repo.get_skill_categories().await.unwrap();

        fetcher.set(
            SKILLS_DOCUMENT,
            Ok(r#"{"skill_categories":[{"category":"Only","skills":[]}]}"#.to_string()),
        );
        repo.refresh().await.unwrap();

        let categories = repo.get_skill_categories().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].category, "Only");
        assert_eq!(fetcher.calls(SKILLS_DOCUMENT), 2);
    }
}
