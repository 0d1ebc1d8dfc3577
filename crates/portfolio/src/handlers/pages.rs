use askama::Template;
use axum::{
    extract::{Path, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use chrono::Datelike;

use portfolio_core::portfolio::{Project, SkillCategory};

use crate::{handlers::AppError, state::AppState};

const SITE_DESCRIPTION: &str =
    "Software Engineer specializing in Distributed Systems, Microservices, and Scalable Architecture.";

/// Template wrapper that converts Askama templates into HTML responses.
struct HtmlTemplate<T>(T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: Template,
{
    fn into_response(self) -> Response {
        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Failed to render template");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template: {err}"),
                )
                    .into_response()
            }
        }
    }
}

/// Fields every full page passes to the base layout.
struct PageMeta {
    title: String,
    description: String,
    canonical_url: String,
    current_year: i32,
}

impl PageMeta {
    fn new(state: &AppState, uri: &Uri, title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            canonical_url: format!("{}{}", state.site_url, uri.path()),
            current_year: chrono::Utc::now().year(),
        }
    }
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    meta: PageMeta,
    projects: Vec<Project>,
    skill_categories: Vec<SkillCategory>,
}

#[derive(Template)]
#[template(path = "project_detail.html")]
struct ProjectTemplate {
    meta: PageMeta,
    project: Project,
}

/// Project body without the layout, for in-place loading.
#[derive(Template)]
#[template(path = "partials/project_fragment.html")]
struct ProjectFragmentTemplate {
    project: Project,
}

#[derive(Template)]
#[template(path = "404.html")]
struct NotFoundTemplate {
    meta: PageMeta,
}

fn not_found_page(state: &AppState, uri: &Uri, title: &str, description: &str) -> Response {
    let meta = PageMeta::new(state, uri, title, description);
    (StatusCode::NOT_FOUND, HtmlTemplate(NotFoundTemplate { meta })).into_response()
}

/// Handler for the home page (GET /).
pub async fn home(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    tracing::debug!("Rendering home page");

    let projects = state.service.get_featured_projects().await;
    let skill_categories = state.service.get_skill_categories().await;

    HtmlTemplate(HomeTemplate {
        meta: PageMeta::new(&state, &uri, "Home", SITE_DESCRIPTION),
        projects,
        skill_categories,
    })
}

/// Handler for a project page (GET /projects/{id}).
///
/// Ids that are not numbers render the 404 page like unknown ids.
pub async fn project_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    uri: Uri,
) -> Result<Response, AppError> {
    let Ok(project_id) = id.parse::<u32>() else {
        tracing::debug!(project_id = %id, "Invalid project ID");
        return Ok(project_not_found(&state, &uri));
    };

    tracing::debug!(project_id, "Rendering project page");

    let Some(project) = state.service.get_project(project_id).await? else {
        return Ok(project_not_found(&state, &uri));
    };

    let meta = PageMeta::new(&state, &uri, &project.title, &project.description);
    Ok(HtmlTemplate(ProjectTemplate { meta, project }).into_response())
}

/// Handler for the project body fragment (GET /projects/{id}/details).
pub async fn project_fragment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let Ok(project_id) = id.parse::<u32>() else {
        tracing::debug!(project_id = %id, "Invalid project ID for fragment");
        return Ok((StatusCode::BAD_REQUEST, "Invalid project ID").into_response());
    };

    match state.service.get_project(project_id).await? {
        Some(project) => Ok(HtmlTemplate(ProjectFragmentTemplate { project }).into_response()),
        None => Ok((StatusCode::NOT_FOUND, "Project not found").into_response()),
    }
}

/// Fallback for unmatched routes.
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> Response {
    not_found_page(
        &state,
        &uri,
        "Page Not Found",
        "The page you're looking for doesn't exist.",
    )
}

fn project_not_found(state: &AppState, uri: &Uri) -> Response {
    not_found_page(
        state,
        uri,
        "Project Not Found",
        "The project you're looking for doesn't exist.",
    )
}
