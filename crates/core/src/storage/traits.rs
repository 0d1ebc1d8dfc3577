use std::collections::HashMap;

use async_trait::async_trait;

use crate::portfolio::{Project, SkillCategory, Technology};

use super::Result;

/// Repository for project operations.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Gets every project, with technologies and detailed descriptions resolved.
    async fn get_all_projects(&self) -> Result<Vec<Project>>;

    /// Gets a project by its ID. Fails with `NotFound` when absent.
    async fn get_project_by_id(&self, id: u32) -> Result<Project>;

    /// Drops any loaded data and reloads it from the source.
    async fn refresh(&self) -> Result<()> {
        Ok(())
    }
}

/// Repository for technology operations.
#[async_trait]
pub trait TechnologyRepository: Send + Sync {
    /// Gets a technology by name. Fails with `NotFound` when absent.
    async fn get_technology(&self, name: &str) -> Result<Technology>;

    /// Gets the technologies named in `names`, in input order.
    ///
    /// Unknown names are skipped. A load failure yields an empty list.
    async fn get_technologies(&self, names: &[String]) -> Vec<Technology>;

    /// Gets a copy of the full technology dictionary.
    async fn get_all_technologies(&self) -> Result<HashMap<String, Technology>>;

    /// Drops any loaded data and reloads it from the source.
    async fn refresh(&self) -> Result<()> {
        Ok(())
    }
}

/// Repository for skill operations.
#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Gets every skill category in display order.
    async fn get_skill_categories(&self) -> Result<Vec<SkillCategory>>;

    /// Drops any loaded data and reloads it from the source.
    async fn refresh(&self) -> Result<()> {
        Ok(())
    }
}
