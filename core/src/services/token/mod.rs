//! Token service module for JWT verification
//!
//! Tokens are HS256-signed and carry `sub`, `iat` and `exp`. The API
//! auth gate only verifies; issuing exists for operators and tests.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
