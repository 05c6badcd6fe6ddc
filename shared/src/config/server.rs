//! Server configuration module

use serde::{Deserialize, Serialize};

use super::first_var;

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Maximum JSON/form payload size in bytes
    #[serde(default = "default_max_payload_size")]
    pub max_payload_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: 8000,
            workers: 0, // Use all CPU cores
            max_payload_size: default_max_payload_size(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: first_var(&["SERVER_HOST"]).unwrap_or(defaults.host),
            port: first_var(&["SERVER_PORT", "PORT"])
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            workers: first_var(&["SERVER_WORKERS"])
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.workers),
            max_payload_size: defaults.max_payload_size,
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Allowed origins; `*` allows any
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,

    /// Allow credentials (cookies carrying the auth token)
    #[serde(default = "default_allow_credentials")]
    pub allow_credentials: bool,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_max_age")]
    pub max_age: usize,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            allow_credentials: default_allow_credentials(),
            max_age: default_max_age(),
        }
    }
}

impl CorsConfig {
    /// Create from environment variables
    ///
    /// `CORS_ORIGIN` accepts a comma-separated list.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let allowed_origins = first_var(&["CORS_ORIGIN", "ALLOWED_ORIGINS"])
            .map(|value| {
                value
                    .split(',')
                    .map(|origin| origin.trim().to_string())
                    .filter(|origin| !origin.is_empty())
                    .collect()
            })
            .unwrap_or(defaults.allowed_origins);

        Self {
            allowed_origins,
            allow_credentials: defaults.allow_credentials,
            max_age: first_var(&["CORS_MAX_AGE"])
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_age),
        }
    }

    /// Whether any origin is accepted
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

fn default_max_payload_size() -> usize {
    64 * 1024 // 64 KB
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:8000".to_string()]
}

fn default_allow_credentials() -> bool {
    true
}

fn default_max_age() -> usize {
    3600
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.workers, 0);
        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_server_config_new() {
        let config = ServerConfig::new("localhost", 3000);
        assert_eq!(config.bind_address(), "localhost:3000");
    }

    #[test]
    fn test_cors_config_default() {
        let config = CorsConfig::default();
        assert_eq!(config.allowed_origins, vec!["http://localhost:8000"]);
        assert!(config.allow_credentials);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_cors_any_origin() {
        let config = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            ..Default::default()
        };
        assert!(config.allows_any_origin());
    }
}
