//! # Noteboard Core
//!
//! Core business logic and domain layer for the Noteboard backend.
//! This crate contains the resource entity, the resource lifecycle service,
//! repository and image store interfaces, and the domain error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
