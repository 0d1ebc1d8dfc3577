mod mock_data;
mod operations;
mod types;

pub use mock_data::{demo_projects, demo_skill_categories, demo_technologies, DemoProject};
pub use operations::{
    build_project, decode_project_records, diagram_mime_type, featured_projects, find_project,
    render_markdown, select_technologies,
};
pub use types::{
    DiagramContent, Project, ProjectRecord, ProjectsDocument, Skill, SkillCategory,
    SkillsDocument, TechnologiesDocument, Technology,
};
