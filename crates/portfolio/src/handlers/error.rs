use std::any::Any;

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Datelike;
use portfolio_core::storage::{repository_error_to_status_code, RepositoryError};

/// Error page shown for failed requests. Details stay in the logs.
#[derive(Template)]
#[template(path = "500.html")]
struct ErrorPageTemplate {
    title: &'static str,
    current_year: i32,
}

/// Renders the error page with the given status.
fn error_page(status: StatusCode) -> Response {
    let title = match status {
        StatusCode::NOT_FOUND => "Not Found",
        StatusCode::BAD_GATEWAY => "Content Unavailable",
        _ => "Something Went Wrong",
    };
    let page = ErrorPageTemplate {
        title,
        current_year: chrono::Utc::now().year(),
    };

    match page.render() {
        Ok(html) => (status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Failed to render error page");
            (status, "Internal Server Error").into_response()
        }
    }
}

/// Response for a panicking handler, used by `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = panic.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    };

    tracing::error!(panic = message, "Handler panicked");
    error_page(StatusCode::INTERNAL_SERVER_ERROR)
}

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            let code = repository_error_to_status_code(repo_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::error!(status = status_code.as_u16(), error = %self.0, "Request failed");
        error_page(status_code)
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
