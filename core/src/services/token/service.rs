//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::Claims;
use crate::errors::DomainError;

use super::config::TokenServiceConfig;

/// Service for issuing and verifying HS256 JWTs
#[derive(Clone)]
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Signs a token for `subject` using the configured lifetime
    pub fn issue(&self, subject: &str) -> Result<String, DomainError> {
        let claims = Claims::new(subject, self.config.token_ttl_seconds);
        self.encode(&claims)
    }

    /// Signs arbitrary claims
    pub fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Failed to sign token: {}", e),
            }
        })
    }

    /// Verifies signature and expiry
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Token is valid
    /// * `Err(DomainError::Unauthorized)` - Malformed, badly signed or expired token
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token rejected");
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        DomainError::unauthorized("Your token has expired, please log in again")
                    }
                    _ => DomainError::unauthorized("Invalid token, please log in again"),
                }
            })
    }
}
