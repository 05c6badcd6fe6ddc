//! Shared utilities and common types for the Noteboard server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Pagination and response envelopes for list/detail endpoints
//! - Utility functions (slug derivation)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, CorsConfig, DatabaseConfig, Environment, ServerConfig, UploadConfig,
};
pub use types::{
    CreatedResponse, DataResponse, HealthResponse, ListQuery, ListResponse, Pagination,
};
pub use utils::slug::slugify;
