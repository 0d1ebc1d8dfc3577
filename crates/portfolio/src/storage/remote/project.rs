//! Project repository backed by the content repository.
//!
//! `projects/projects.json` is read through the TTL cache on every call and
//! joined with technologies, detailed descriptions and diagrams. Only a
//! failure to load the document itself is reported to the caller; problems
//! with a single record or one of its files are logged and worked around.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use portfolio_core::cache::{diagram_path, project_details_path, PROJECTS_DOCUMENT};
use portfolio_core::portfolio::{
    build_project, decode_project_records, diagram_mime_type, find_project, DiagramContent,
    Project, ProjectRecord, ProjectsDocument,
};
use portfolio_core::storage::{ProjectRepository, RepositoryError, Result, TechnologyRepository};

use super::content::ContentStore;
use super::prewarm::Prewarm;

pub struct RemoteProjectRepository {
    store: ContentStore,
    technologies: Arc<dyn TechnologyRepository>,
    initialized: AtomicBool,
}

impl RemoteProjectRepository {
    pub fn new(store: ContentStore, technologies: Arc<dyn TechnologyRepository>) -> Self {
        Self {
            store,
            technologies,
            initialized: AtomicBool::new(false),
        }
    }

    async fn load_projects(&self) -> Result<Vec<Project>> {
        let document: ProjectsDocument = self.store.load_document(PROJECTS_DOCUMENT).await?;
        let (records, failures) = decode_project_records(document);

        for failure in &failures {
            tracing::warn!(
                path = PROJECTS_DOCUMENT,
                error = %failure,
                "Skipping malformed project record"
            );
        }

        let mut projects = Vec::with_capacity(records.len());
        for record in records {
            projects.push(self.resolve(record).await);
        }

        self.initialized.store(true, Ordering::Release);
        tracing::debug!(count = projects.len(), "Loaded projects");
        Ok(projects)
    }

    async fn resolve(&self, record: ProjectRecord) -> Project {
        let technologies = self.technologies.get_technologies(&record.technologies).await;
        let detailed_description = self.detailed_description(&record).await;
        let diagram = self.diagram(&record).await;

        build_project(record, detailed_description, technologies, diagram)
    }

    /// Long-form description, or the short one when it is missing or fails.
    async fn detailed_description(&self, record: &ProjectRecord) -> String {
        let Some(file) = record.detailed_description_file.as_deref() else {
            return record.description.clone();
        };

        let path = project_details_path(file);
        match self.store.load_text(&path).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    project_id = record.id,
                    path = %path,
                    error = %err,
                    "Falling back to short description"
                );
                record.description.clone()
            }
        }
    }

    async fn diagram(&self, record: &ProjectRecord) -> Option<DiagramContent> {
        let file = record.architecture_diagram_file.as_deref()?;

        let path = diagram_path(file);
        match self.store.load_binary(&path).await {
            Ok(base64) => Some(DiagramContent {
                mime_type: diagram_mime_type(file).to_string(),
                base64,
            }),
            Err(err) => {
                tracing::warn!(
                    project_id = record.id,
                    path = %path,
                    error = %err,
                    "Architecture diagram unavailable"
                );
                None
            }
        }
    }

    /// Drops cached detail and diagram files named by the cached document.
    async fn invalidate_project_files(&self) {
        let Some(bytes) = self.store.peek(PROJECTS_DOCUMENT).await else {
            return;
        };
        let Ok(document) = serde_json::from_slice::<ProjectsDocument>(&bytes) else {
            return;
        };

        let (records, _) = decode_project_records(document);
        for record in records {
            if let Some(file) = record.detailed_description_file.as_deref() {
                self.store.invalidate(&project_details_path(file)).await;
            }
            if let Some(file) = record.architecture_diagram_file.as_deref() {
                self.store.invalidate(&diagram_path(file)).await;
            }
        }
    }
}

#[async_trait]
impl ProjectRepository for RemoteProjectRepository {
    async fn get_all_projects(&self) -> Result<Vec<Project>> {
        self.load_projects().await
    }

    async fn get_project_by_id(&self, id: u32) -> Result<Project> {
        let projects = self.load_projects().await?;
        find_project(projects, id).ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Project",
            id: id.to_string(),
        })
    }

    async fn refresh(&self) -> Result<()> {
        self.initialized.store(false, Ordering::Release);
        self.invalidate_project_files().await;
        self.store.invalidate(PROJECTS_DOCUMENT).await;
        self.load_projects().await.map(|_| ())
    }
}

#[async_trait]
impl Prewarm for RemoteProjectRepository {
    fn name(&self) -> &'static str {
        "projects"
    }

    async fn warm(&self) -> Result<()> {
        self.load_projects().await.map(|_| ())
    }

    fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }
}
