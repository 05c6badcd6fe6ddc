//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::first_var;

/// Token verification settings for the auth gate
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Shared secret for HS256 signatures
    pub jwt_secret: String,

    /// Cookie consulted when no `Authorization` header is present
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Lifetime of tokens issued by this service, in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_seconds: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            cookie_name: default_cookie_name(),
            token_ttl_seconds: default_token_ttl(),
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: first_var(&["JWT_SECRET"]).unwrap_or(defaults.jwt_secret),
            cookie_name: first_var(&["AUTH_COOKIE_NAME"]).unwrap_or(defaults.cookie_name),
            token_ttl_seconds: first_var(&["JWT_EXPIRES_IN_SECONDS"])
                .and_then(|v| v.parse().ok())
                .filter(|ttl: &i64| *ttl > 0)
                .unwrap_or(defaults.token_ttl_seconds),
        }
    }

    /// Create a configuration with an explicit secret
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            ..Default::default()
        }
    }

    pub fn has_secret(&self) -> bool {
        !self.jwt_secret.is_empty()
    }
}

fn default_cookie_name() -> String {
    String::from("token")
}

fn default_token_ttl() -> i64 {
    86400 // 24 hours
}
