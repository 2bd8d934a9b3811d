//! Shared utilities for API access, configuration and errors.
//!
//! Centralizing these keeps network behavior consistent across features and
//! routes. Callers must still avoid logging passwords or other secrets.

pub mod api;
pub mod config;
pub mod errors;

pub use api::{ApiClient, path_segment};
pub use config::AppConfig;
pub use errors::AppError;
