//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the Noteboard backend.
//! It provides concrete implementations of the ports declared in `nb_core`.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL connection pool and resource repository using SQLx
//! - **Storage**: Local filesystem image store serving the `uploads/` tree

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Storage module - Image file persistence
pub mod storage;

pub use database::{DatabasePool, MySqlResourceRepository};
pub use storage::LocalImageStore;

use nb_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Storage {
            message: err.to_string(),
        }
    }
}
