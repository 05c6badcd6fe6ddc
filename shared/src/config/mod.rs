//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token verification configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//! - `upload` - Image upload policy and storage root

pub mod auth;
pub mod database;
pub mod environment;
pub mod server;
pub mod upload;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// Re-export commonly used types
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use environment::Environment;
pub use server::{CorsConfig, ServerConfig};
pub use upload::UploadConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Upload configuration
    #[serde(default)]
    pub upload: UploadConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            upload: UploadConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

/// Raised when the environment cannot produce a usable configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("configuration error: {message}")]
pub struct ConfigError {
    pub message: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Fails only when a non-development environment is missing a token
    /// secret; every other value falls back to its default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let auth = AuthConfig::from_env();
        require_secret(environment, &auth)?;

        Ok(Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth,
            upload: UploadConfig::from_env(),
            cors: CorsConfig::from_env(),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

/// Only development may fall back to the built-in token secret
fn require_secret(environment: Environment, auth: &AuthConfig) -> Result<(), ConfigError> {
    if environment.is_development() || auth.has_secret() {
        return Ok(());
    }
    Err(ConfigError {
        message: format!("JWT_SECRET must be set in the {} environment", environment),
    })
}

/// Read the first set variable out of `keys`
pub(crate) fn first_var(keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| std::env::var(key).ok())
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENV_KEYS: [&str; 3] = ["ENVIRONMENT", "NODE_ENV", "RUST_ENV"];

    #[test]
    fn test_default_config_is_production() {
        let config = AppConfig::default();
        assert!(config.is_production());
        assert!(!config.is_development());
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.upload.max_file_size, 5 * 1024 * 1024);
    }

    #[test]
    fn test_secret_required_outside_development() {
        let no_secret = AuthConfig::default();
        assert!(require_secret(Environment::Development, &no_secret).is_ok());
        assert!(require_secret(Environment::Staging, &no_secret).is_err());
        assert!(require_secret(Environment::Production, &no_secret).is_err());
        assert!(require_secret(Environment::Production, &AuthConfig::with_secret("s3cret")).is_ok());

        let err = require_secret(Environment::Staging, &no_secret).unwrap_err();
        assert_eq!(
            err.to_string(),
            "configuration error: JWT_SECRET must be set in the staging environment"
        );
    }

    // The only test in this crate that touches the process environment
    #[test]
    fn test_from_env_environment_resolution() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        std::env::remove_var("JWT_SECRET");

        assert_eq!(Environment::from_env(), Environment::Production);
        assert!(AppConfig::from_env().is_err());

        std::env::set_var("NODE_ENV", "qa");
        assert_eq!(Environment::from_env(), Environment::Production);
        assert!(AppConfig::from_env().is_err());

        std::env::set_var("JWT_SECRET", "s3cret");
        let config = AppConfig::from_env().unwrap();
        assert!(!config.is_development());

        std::env::remove_var("JWT_SECRET");
        std::env::set_var("NODE_ENV", "development");
        let config = AppConfig::from_env().unwrap();
        assert!(config.is_development());

        std::env::remove_var("NODE_ENV");
    }
}
