//! Configuration for the token service

use nb_shared::AuthConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Token lifetime in seconds
    pub token_ttl_seconds: i64,
    /// Clock skew tolerated on `exp`, in seconds
    pub leeway_seconds: u64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            token_ttl_seconds: 24 * 60 * 60,
            leeway_seconds: 0,
        }
    }
}

impl From<&AuthConfig> for TokenServiceConfig {
    fn from(config: &AuthConfig) -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: if config.has_secret() {
                config.jwt_secret.clone()
            } else {
                defaults.jwt_secret
            },
            token_ttl_seconds: config.token_ttl_seconds,
            ..defaults
        }
    }
}
