use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::storage::{RepositoryError, Result};

/// The only envelope encoding the contents API uses for file bodies.
const BASE64_ENCODING: &str = "base64";

/// A file as returned by the contents API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEnvelope {
    pub content: String,
    pub encoding: String,
}

/// Removes every whitespace character from `s`.
///
/// The upstream API wraps base64 payloads at a fixed column width.
pub fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validates the envelope encoding and returns the unwrapped base64 body.
///
/// The body itself is passed through untouched; binary assets are rendered
/// as data URIs and never decoded to raw bytes.
pub fn normalize_base64(envelope: &ContentEnvelope) -> Result<String> {
    if envelope.encoding != BASE64_ENCODING {
        return Err(RepositoryError::Decode(format!(
            "unsupported encoding: {}",
            envelope.encoding
        )));
    }

    Ok(strip_whitespace(&envelope.content))
}

/// Decodes an envelope into UTF-8 text.
///
/// # Examples
///
/// ```
/// use portfolio_core::content::{decode_text, ContentEnvelope};
///
/// let envelope = ContentEnvelope {
///     content: "aGVs\nbG8=\n".to_string(),
///     encoding: "base64".to_string(),
/// };
/// assert_eq!(decode_text(&envelope).unwrap(), "hello");
/// ```
pub fn decode_text(envelope: &ContentEnvelope) -> Result<String> {
    let body = normalize_base64(envelope)?;

    let bytes = STANDARD
        .decode(body.as_bytes())
        .map_err(|e| RepositoryError::Decode(format!("invalid base64 content: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| RepositoryError::Decode(format!("content is not valid UTF-8: {e}")))
}
