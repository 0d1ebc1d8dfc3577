//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `portfolio_core::storage`. The backend is selected at runtime: a
//! configured GitHub token selects `remote`, otherwise `inmemory`.

pub mod inmemory;
pub mod remote;
