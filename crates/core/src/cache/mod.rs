mod keys;
mod traits;

pub use keys::{
    diagram_path, project_details_path, PROJECTS_DOCUMENT, SKILLS_DOCUMENT, TECHNOLOGIES_DOCUMENT,
};
pub use traits::Cache;
