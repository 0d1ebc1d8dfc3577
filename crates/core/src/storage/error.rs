use thiserror::Error;

/// Maximum number of characters of an upstream error body kept in
/// [`RepositoryError::UpstreamStatus`].
pub const BODY_SNIPPET_LEN: usize = 512;

/// Errors that can occur while loading portfolio data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
}

impl RepositoryError {
    /// Builds an `UpstreamStatus` error, truncating the body to a snippet.
    pub fn upstream(status: u16, body: &str) -> Self {
        Self::UpstreamStatus {
            status,
            body: body.chars().take(BODY_SNIPPET_LEN).collect(),
        }
    }

    /// Returns true for a lookup miss on a specific id or name.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
