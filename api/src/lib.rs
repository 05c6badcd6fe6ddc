//! # Noteboard API
//!
//! HTTP layer for the Noteboard backend: actix-web routes for categories and
//! notes, the JWT auth gate, the upload extractor and terminal error
//! formatting.

pub mod app;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use app::{create_app, AppSettings, AppState};
