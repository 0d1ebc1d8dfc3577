use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A technology with its icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    #[serde(rename = "icon")]
    pub icon_url: String,
}

impl Technology {
    pub fn new(name: impl Into<String>, icon_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_url: icon_url.into(),
        }
    }
}

/// A base64 architecture diagram ready to be embedded as a data URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramContent {
    pub mime_type: String,
    pub base64: String,
}

impl DiagramContent {
    /// Returns the diagram as a `data:` URI.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

/// A software project as shown on the site.
///
/// `technologies` only holds names that resolved when the project was built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub detailed_description: String,
    pub architecture_diagram_url: Option<String>,
    pub architecture_diagram: Option<DiagramContent>,
    pub source_url: String,
    pub live_url: Option<String>,
    pub primary_language: String,
    pub technologies: Vec<Technology>,
    pub featured: bool,
}

impl Project {
    /// The detailed description rendered from markdown to HTML.
    pub fn detailed_html(&self) -> String {
        super::operations::render_markdown(&self.detailed_description)
    }

    /// Returns the image source for the architecture diagram, preferring
    /// embedded content over a plain URL.
    pub fn diagram_src(&self) -> Option<String> {
        self.architecture_diagram
            .as_ref()
            .map(DiagramContent::data_uri)
            .or_else(|| self.architecture_diagram_url.clone())
    }
}

/// A technical skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    #[serde(rename = "icon", default)]
    pub icon_url: String,
    #[serde(default)]
    pub category: String,
}

/// Skills grouped under a display category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

/// A raw project record as stored in `projects/projects.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub architecture_diagram_url: Option<String>,
    #[serde(default)]
    pub architecture_diagram_file: Option<String>,
    #[serde(default)]
    pub detailed_description_file: Option<String>,
}

/// The `projects/projects.json` document.
///
/// Records stay as raw JSON so that one malformed record does not fail the
/// whole document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsDocument {
    #[serde(default)]
    pub projects: Vec<serde_json::Value>,
}

/// The `technologies/technologies.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnologiesDocument {
    #[serde(default)]
    pub technologies: HashMap<String, Technology>,
}

/// The `skills/skills.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsDocument {
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
}
