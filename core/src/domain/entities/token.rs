//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (caller identity)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims valid from now for `ttl_seconds`
    pub fn new(subject: impl Into<String>, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.into(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
