use std::time::Duration;

use axum::{http::StatusCode, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer, compression::CompressionLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        error::panic_response,
        health::health,
        pages::{home, not_found, project_detail, project_fragment},
        static_files::serve_static,
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/projects/{id}", get(project_detail))
        .route("/projects/{id}/details", get(project_fragment))
        .route("/health", get(health))
        .route("/static/{*path}", get(serve_static))
        .fallback(not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(10),
        ))
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}
