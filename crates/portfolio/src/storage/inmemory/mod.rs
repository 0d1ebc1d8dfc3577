//! In-memory storage backend.
//!
//! Serves the static demo data when no content repository token is
//! configured. No network, no cache and no warm-up.

mod repository;

pub use repository::{
    InMemoryProjectRepository, InMemorySkillRepository, InMemoryTechnologyRepository,
};
