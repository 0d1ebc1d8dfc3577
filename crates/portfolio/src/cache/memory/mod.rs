//! In-memory cache backend implementation.
//!
//! Provides a thread-safe TTL cache and the background task that purges
//! expired entries from it.

mod cache;
mod sweeper;

pub use cache::MemoryCache;
pub use sweeper::spawn_sweeper;
