//! Pure functions for mapping repository errors to HTTP status codes.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `Transport` -> 502 (Bad Gateway)
/// - `UpstreamStatus` -> 502 (Bad Gateway)
/// - `Decode` -> 502 (Bad Gateway)
/// - `Parse` -> 502 (Bad Gateway)
///
/// Everything except `NotFound` means the content repository could not be
/// read, which is an upstream failure from the client's point of view.
///
/// # Examples
///
/// ```
/// use portfolio_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound {
///     entity_type: "Project",
///     id: "7".to_string(),
/// };
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::Transport(_) => 502,
        RepositoryError::UpstreamStatus { .. } => 502,
        RepositoryError::Decode(_) => 502,
        RepositoryError::Parse { .. } => 502,
    }
}
