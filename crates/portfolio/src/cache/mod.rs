//! Cache backend implementations.
//!
//! Concrete implementations of the [`portfolio_core::cache::Cache`] trait.
//! Only an in-memory backend exists; entries are lost on restart.

pub mod memory;

pub use memory::{spawn_sweeper, MemoryCache};
