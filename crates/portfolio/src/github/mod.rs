//! GitHub content repository access.

mod client;

pub use client::GitHubClient;
