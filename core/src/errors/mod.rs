//! Domain-specific error types and error handling.

mod types;

#[cfg(test)]
mod tests;

// Re-export all error types
pub use types::UploadError;

use thiserror::Error;

use crate::domain::entities::resource::ResourceKind;

/// Core domain errors
///
/// Every variant maps to exactly one HTTP status in the presentation layer.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("no {kind} for this id: {id}")]
    NotFound { kind: ResourceKind, id: String },

    #[error("Invalid id: {id}")]
    InvalidId { id: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("{message}")]
    Unauthorized { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl DomainError {
    pub fn not_found(kind: ResourceKind, id: impl Into<String>) -> Self {
        DomainError::NotFound { kind, id: id.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation { message: message.into() }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        DomainError::Unauthorized { message: message.into() }
    }

    /// Whether the failure was anticipated (as opposed to an infrastructure fault)
    pub fn is_operational(&self) -> bool {
        !matches!(self, DomainError::Storage { .. } | DomainError::Internal { .. })
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
