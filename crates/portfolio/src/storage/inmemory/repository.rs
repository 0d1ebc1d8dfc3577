//! In-memory repository implementations.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use portfolio_core::portfolio::{
    build_project, demo_projects, demo_skill_categories, demo_technologies, find_project,
    select_technologies, DemoProject, Project, SkillCategory, Technology,
};
use portfolio_core::storage::{
    ProjectRepository, RepositoryError, Result, SkillRepository, TechnologyRepository,
};

/// Technology dictionary built from the static demo table.
#[derive(Debug, Clone)]
pub struct InMemoryTechnologyRepository {
    technologies: Arc<HashMap<String, Technology>>,
}

impl Default for InMemoryTechnologyRepository {
    fn default() -> Self {
        Self::new(demo_technologies())
    }
}

impl InMemoryTechnologyRepository {
    pub fn new(technologies: HashMap<String, Technology>) -> Self {
        Self {
            technologies: Arc::new(technologies),
        }
    }

    /// Icon URL for a technology name, empty when unknown.
    pub fn icon_for(&self, name: &str) -> String {
        self.technologies
            .get(name)
            .map(|t| t.icon_url.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TechnologyRepository for InMemoryTechnologyRepository {
    async fn get_technology(&self, name: &str) -> Result<Technology> {
        self.technologies
            .get(name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound {
                entity_type: "Technology",
                id: name.to_string(),
            })
    }

    async fn get_technologies(&self, names: &[String]) -> Vec<Technology> {
        select_technologies(&self.technologies, names)
    }

    async fn get_all_technologies(&self) -> Result<HashMap<String, Technology>> {
        Ok(self.technologies.as_ref().clone())
    }
}

/// Skill categories built once at construction.
#[derive(Debug, Clone)]
pub struct InMemorySkillRepository {
    categories: Arc<Vec<SkillCategory>>,
}

impl InMemorySkillRepository {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self {
            categories: Arc::new(categories),
        }
    }

    /// Builds the demo categories with icons resolved through `technologies`.
    pub fn from_technologies(technologies: &InMemoryTechnologyRepository) -> Self {
        Self::new(demo_skill_categories(|name| technologies.icon_for(name)))
    }
}

#[async_trait]
impl SkillRepository for InMemorySkillRepository {
    async fn get_skill_categories(&self) -> Result<Vec<SkillCategory>> {
        Ok(self.categories.as_ref().clone())
    }
}

/// Demo projects whose technology names resolve through a technology
/// repository on every read.
#[derive(Clone)]
pub struct InMemoryProjectRepository {
    projects: Arc<Vec<DemoProject>>,
    technologies: Arc<dyn TechnologyRepository>,
}

impl InMemoryProjectRepository {
    pub fn new(projects: Vec<DemoProject>, technologies: Arc<dyn TechnologyRepository>) -> Self {
        Self {
            projects: Arc::new(projects),
            technologies,
        }
    }

    /// Creates the repository over the static demo projects.
    pub fn demo(technologies: Arc<dyn TechnologyRepository>) -> Self {
        Self::new(demo_projects(), technologies)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn get_all_projects(&self) -> Result<Vec<Project>> {
        let mut projects = Vec::with_capacity(self.projects.len());

        for demo in self.projects.iter() {
            let technologies = self
                .technologies
                .get_technologies(&demo.record.technologies)
                .await;
            projects.push(build_project(
                demo.record.clone(),
                demo.detailed_description.to_string(),
                technologies,
                None,
            ));
        }

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: u32) -> Result<Project> {
        let projects = self.get_all_projects().await?;
        find_project(projects, id).ok_or_else(|| RepositoryError::NotFound {
            entity_type: "Project",
            id: id.to_string(),
        })
    }
}
