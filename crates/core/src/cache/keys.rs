//! Resource paths inside the content repository.
//!
//! Each path doubles as the cache key for the resource it names, so there is
//! exactly one cache entry per remote file.

/// Top-level project list.
pub const PROJECTS_DOCUMENT: &str = "projects/projects.json";

/// Skill category list.
pub const SKILLS_DOCUMENT: &str = "skills/skills.json";

/// Technology name to icon dictionary.
pub const TECHNOLOGIES_DOCUMENT: &str = "technologies/technologies.json";

/// Returns the path of a project's long-form description.
pub fn project_details_path(filename: &str) -> String {
    format!("projects/details/{}", filename)
}

/// Returns the path of an architecture diagram asset.
pub fn diagram_path(filename: &str) -> String {
    format!("assets/diagrams/{}", filename)
}
