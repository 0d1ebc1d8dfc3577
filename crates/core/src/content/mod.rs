//! Content repository payloads.
//!
//! The contents API wraps every file in a JSON envelope carrying a base64
//! body. This module decodes those envelopes and defines the fetcher seam
//! the repositories read through.

mod envelope;
mod traits;

pub use envelope::{decode_text, normalize_base64, strip_whitespace, ContentEnvelope};
pub use traits::ContentFetcher;
