//! Facade over the repositories used by the HTTP handlers.
//!
//! Handlers never see repository errors for whole-document loads: a failed
//! load is logged and rendered as an empty section instead of an error page.

use std::sync::Arc;

use portfolio_core::portfolio::{featured_projects, Project, SkillCategory, Technology};
use portfolio_core::storage::{
    ProjectRepository, RepositoryError, Result, SkillRepository, TechnologyRepository,
};

/// Icon shown for technologies missing from the dictionary.
pub const DEFAULT_TECHNOLOGY_ICON: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@latest/icons/devicon/devicon-original.svg";

#[derive(Clone)]
pub struct PortfolioService {
    projects: Arc<dyn ProjectRepository>,
    skills: Arc<dyn SkillRepository>,
    technologies: Arc<dyn TechnologyRepository>,
}

impl PortfolioService {
    pub fn new(
        projects: Arc<dyn ProjectRepository>,
        skills: Arc<dyn SkillRepository>,
        technologies: Arc<dyn TechnologyRepository>,
    ) -> Self {
        Self {
            projects,
            skills,
            technologies,
        }
    }

    pub async fn get_all_projects(&self) -> Vec<Project> {
        match self.projects.get_all_projects().await {
            Ok(projects) => projects,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load projects");
                Vec::new()
            }
        }
    }

    pub async fn get_featured_projects(&self) -> Vec<Project> {
        featured_projects(self.get_all_projects().await)
    }

    /// Looks up a single project.
    ///
    /// Fails only when the project list itself could not be loaded.
    pub async fn get_project(&self, id: u32) -> Result<Option<Project>> {
        match self.projects.get_project_by_id(id).await {
            Ok(project) => Ok(Some(project)),
            Err(err) if err.is_not_found() => {
                tracing::debug!(project_id = id, "Project not found");
                Ok(None)
            }
            Err(err) => {
                tracing::error!(project_id = id, error = %err, "Failed to load project");
                Err(err)
            }
        }
    }

    pub async fn get_skill_categories(&self) -> Vec<SkillCategory> {
        match self.skills.get_skill_categories().await {
            Ok(categories) => categories,
            Err(err) => {
                tracing::error!(error = %err, "Failed to load skill categories");
                Vec::new()
            }
        }
    }

    /// Looks up a technology, substituting a generic icon for unknown names.
    pub async fn get_technology(&self, name: &str) -> Technology {
        match self.technologies.get_technology(name).await {
            Ok(technology) => technology,
            Err(RepositoryError::NotFound { .. }) => {
                tracing::debug!(name, "Unknown technology, using default icon");
                Technology::new(name, DEFAULT_TECHNOLOGY_ICON)
            }
            Err(err) => {
                tracing::error!(name, error = %err, "Failed to load technologies");
                Technology::new(name, DEFAULT_TECHNOLOGY_ICON)
            }
        }
    }

    /// Reloads technologies, then skills, then projects.
    ///
    /// Every repository is refreshed even if an earlier one fails; the first
    /// error is returned.
    pub async fn refresh(&self) -> Result<()> {
        let results = [
            ("technologies", self.technologies.refresh().await),
            ("skills", self.skills.refresh().await),
            ("projects", self.projects.refresh().await),
        ];

        let mut first_error = None;
        for (repository, result) in results {
            match result {
                Ok(()) => tracing::info!(repository, "Repository refreshed"),
                Err(err) => {
                    tracing::error!(repository, error = %err, "Repository refresh failed");
                    first_error.get_or_insert(err);
                }
            }
        }

        match first_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
