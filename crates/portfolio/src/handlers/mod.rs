pub mod error;
pub mod health;
pub mod pages;
pub mod static_files;

pub use error::AppError;
