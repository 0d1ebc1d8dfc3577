//! portfolio_core - pure domain logic for the portfolio website.
//!
//! Types, parsing, selection and decoding functions live here. Anything that
//! touches the network, a lock or a clock lives in the `portfolio` crate.

pub mod cache;
pub mod content;
pub mod portfolio;
pub mod storage;
