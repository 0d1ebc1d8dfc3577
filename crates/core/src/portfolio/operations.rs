//! Pure functions over portfolio data.

use std::collections::HashMap;

use pulldown_cmark::{html, Options, Parser};

use super::types::{DiagramContent, Project, ProjectRecord, ProjectsDocument, Technology};

/// Resolves technology names against a dictionary.
///
/// Output order follows `names`. Names missing from the dictionary are
/// dropped, not reported as errors.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use portfolio_core::portfolio::{select_technologies, Technology};
///
/// let mut dict = HashMap::new();
/// dict.insert("Go".to_string(), Technology::new("Go", "go.svg"));
/// dict.insert("Python".to_string(), Technology::new("Python", "py.svg"));
///
/// let names = ["Go", "Unknown", "Python"].map(String::from);
/// let selected = select_technologies(&dict, &names);
///
/// assert_eq!(selected.len(), 2);
/// assert_eq!(selected[0].name, "Go");
/// assert_eq!(selected[1].name, "Python");
/// ```
pub fn select_technologies(
    technologies: &HashMap<String, Technology>,
    names: &[String],
) -> Vec<Technology> {
    names
        .iter()
        .filter_map(|name| technologies.get(name).cloned())
        .collect()
}

/// Decodes each raw record of a projects document on its own.
///
/// Returns the records that decoded and one message per record that did not.
pub fn decode_project_records(document: ProjectsDocument) -> (Vec<ProjectRecord>, Vec<String>) {
    let mut records = Vec::with_capacity(document.projects.len());
    let mut failures = Vec::new();

    for (index, value) in document.projects.into_iter().enumerate() {
        match serde_json::from_value::<ProjectRecord>(value) {
            Ok(record) => records.push(record),
            Err(err) => failures.push(format!("record {index}: {err}")),
        }
    }

    (records, failures)
}

/// Joins a raw record with its resolved parts into a [`Project`].
pub fn build_project(
    record: ProjectRecord,
    detailed_description: String,
    technologies: Vec<Technology>,
    architecture_diagram: Option<DiagramContent>,
) -> Project {
    Project {
        id: record.id,
        title: record.title,
        description: record.description,
        detailed_description,
        architecture_diagram_url: record.architecture_diagram_url.filter(|u| !u.is_empty()),
        architecture_diagram,
        source_url: record.github_url,
        live_url: record.live_url.filter(|u| !u.is_empty()),
        primary_language: record.language,
        technologies,
        featured: record.featured,
    }
}

/// Infers an image MIME type from a diagram filename.
pub fn diagram_mime_type(filename: &str) -> &'static str {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "svg" => "image/svg+xml",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

/// Keeps only featured projects, preserving order.
pub fn featured_projects(projects: Vec<Project>) -> Vec<Project> {
    projects.into_iter().filter(|p| p.featured).collect()
}

/// Finds a project by ID with a linear search.
pub fn find_project(projects: Vec<Project>, id: u32) -> Option<Project> {
    projects.into_iter().find(|p| p.id == id)
}

/// Renders markdown to HTML.
///
/// Tables, strikethrough and task lists are enabled. Raw HTML in the input
/// is passed through, so only trusted content should be rendered.
pub fn render_markdown(text: &str) -> String {
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(text, options);

    let mut rendered = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut rendered, parser);
    rendered
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dictionary() -> HashMap<String, Technology> {
        ["Go", "Python", "Docker"]
            .into_iter()
            .map(|name| {
                (
                    name.to_string(),
                    Technology::new(name, format!("{}.svg", name.to_lowercase())),
                )
            })
            .collect()
    }

    fn record(id: u32, featured: bool) -> ProjectRecord {
        ProjectRecord {
            id,
            title: format!("Project {id}"),
            description: "Short".to_string(),
            github_url: format!("https://github.com/example/p{id}"),
            live_url: None,
            language: "Go".to_string(),
            technologies: vec!["Go".to_string()],
            featured,
            architecture_diagram_url: None,
            architecture_diagram_file: None,
            detailed_description_file: None,
        }
    }

    #[test]
    fn test_select_preserves_order_and_skips_unknowns() {
        let names = ["Python", "Unknown", "Go"].map(String::from);
        let selected = select_technologies(&dictionary(), &names);

        let selected_names: Vec<_> = selected.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(selected_names, vec!["Python", "Go"]);
    }

    #[test]
    fn test_select_empty_names() {
        assert!(select_technologies(&dictionary(), &[]).is_empty());
    }

    #[test]
    fn test_select_keeps_duplicates() {
        let names = ["Go", "Go"].map(String::from);
        assert_eq!(select_technologies(&dictionary(), &names).len(), 2);
    }

    #[test]
    fn test_decode_skips_malformed_records() {
        let document = ProjectsDocument {
            projects: vec![
                json!({"id": 1, "title": "One"}),
                json!({"id": "not-a-number", "title": "Broken"}),
                json!({"id": 3, "title": "Three", "featured": true}),
            ],
        };

        let (records, failures) = decode_project_records(document);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[1].id, 3);
        assert!(records[1].featured);
        assert_eq!(failures.len(), 1);
        assert!(failures[0].starts_with("record 1:"));
    }

    #[test]
    fn test_build_project_maps_fields() {
        let mut raw = record(7, true);
        raw.live_url = Some(String::new());
        raw.architecture_diagram_url = Some("/static/d.svg".to_string());

        let techs = vec![Technology::new("Go", "go.svg")];
        let project = build_project(raw, "Long".to_string(), techs.clone(), None);

        assert_eq!(project.id, 7);
        assert_eq!(project.detailed_description, "Long");
        assert_eq!(project.source_url, "https://github.com/example/p7");
        assert_eq!(project.primary_language, "Go");
        assert_eq!(project.live_url, None);
        assert_eq!(project.technologies, techs);
        assert_eq!(project.diagram_src().as_deref(), Some("/static/d.svg"));
    }

    #[test]
    fn test_embedded_diagram_wins_over_url() {
        let mut raw = record(1, false);
        raw.architecture_diagram_url = Some("/static/d.svg".to_string());
        let diagram = DiagramContent {
            mime_type: "image/svg+xml".to_string(),
            base64: "PHN2Zz4=".to_string(),
        };

        let project = build_project(raw, String::new(), vec![], Some(diagram));

        assert_eq!(
            project.diagram_src().as_deref(),
            Some("data:image/svg+xml;base64,PHN2Zz4=")
        );
    }

    #[test]
    fn test_diagram_mime_type() {
        assert_eq!(diagram_mime_type("a.svg"), "image/svg+xml");
        assert_eq!(diagram_mime_type("a.PNG"), "image/png");
        assert_eq!(diagram_mime_type("a.jpeg"), "image/jpeg");
        assert_eq!(diagram_mime_type("noext"), "application/octet-stream");
    }

    #[test]
    fn test_featured_and_find() {
        let projects: Vec<Project> = [record(1, true), record(2, false), record(3, true)]
            .into_iter()
            .map(|r| build_project(r, String::new(), vec![], None))
            .collect();

        let featured = featured_projects(projects.clone());
        assert_eq!(featured.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 3]);

        assert_eq!(find_project(projects.clone(), 2).map(|p| p.id), Some(2));
        assert!(find_project(projects, 999).is_none());
    }

    #[test]
    fn test_render_markdown() {
        let rendered =
            render_markdown("## Architecture\n\n- uses **Go**\n- [docs](http://x)\n\nDone.");

        assert!(rendered.contains("<h2>Architecture</h2>"));
        assert!(rendered.contains("<li>uses <strong>Go</strong></li>"));
        assert!(rendered.contains(r#"<a href="http://x">docs</a>"#));
        assert!(rendered.contains("<p>Done.</p>"));
    }

    #[test]
    fn test_detailed_html_renders_description() {
        let mut project = build_project(record(1, false), String::new(), vec![], None);
        project.detailed_description = "First.\n\nSecond with `code`.".to_string();

        assert_eq!(
            project.detailed_html(),
            "<p>First.</p>\n<p>Second with <code>code</code>.</p>\n"
        );
    }
}
