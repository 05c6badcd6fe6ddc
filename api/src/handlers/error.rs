//! HTTP error type carried from handlers and middleware to the error formatter

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use nb_core::errors::{DomainError, UploadError};
use std::fmt;

/// Message used when an error carries none, and for hidden internal errors
pub const DEFAULT_ERROR_MESSAGE: &str = "Something went wrong";

/// Error with an explicit HTTP status
///
/// Operational errors are anticipated failures whose message is safe to show.
/// Anything else is wrapped with `isOperational = false` and keeps its cause.
#[derive(Debug)]
pub struct ApiError {
    message: String,
    status_code: StatusCode,
    is_operational: bool,
    source: Option<anyhow::Error>,
}

impl ApiError {
    /// Operational error with an explicit status
    pub fn new(message: impl Into<String>, status_code: StatusCode) -> Self {
        Self {
            message: message.into(),
            status_code,
            is_operational: true,
            source: None,
        }
    }

    /// Unexpected failure; the cause is kept for development output
    pub fn unexpected(cause: impl Into<anyhow::Error>) -> Self {
        let cause = cause.into();
        Self {
            message: cause.to_string(),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            is_operational: false,
            source: Some(cause),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::UNAUTHORIZED)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, StatusCode::NOT_FOUND)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status(&self) -> StatusCode {
        self.status_code
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }

    /// `"fail"` for client errors, `"error"` otherwise
    pub fn status_label(&self) -> &'static str {
        status_label(self.status_code)
    }

    /// Rendered cause chain
    pub fn stack(&self) -> String {
        match &self.source {
            Some(cause) => format!("ApiError: {}\n{:?}", self.message, cause),
            None => format!("ApiError: {}", self.message),
        }
    }
}

pub fn status_label(status: StatusCode) -> &'static str {
    if status.is_client_error() {
        "fail"
    } else {
        "error"
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Minimal body; the error formatter replaces it with the final shape
    fn error_response(&self) -> HttpResponse {
        let message = if self.is_operational && !self.message.is_empty() {
            self.message.as_str()
        } else {
            DEFAULT_ERROR_MESSAGE
        };

        HttpResponse::build(self.status_code).json(serde_json::json!({
            "status": self.status_label(),
            "message": message,
        }))
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        let status = match err {
            UploadError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        };
        Self::new(err.to_string(), status)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::not_found(err.to_string()),
            DomainError::InvalidId { .. } | DomainError::Validation { .. } => {
                Self::bad_request(err.to_string())
            }
            DomainError::Unauthorized { .. } => Self::unauthorized(err.to_string()),
            DomainError::Upload(upload) => upload.into(),
            DomainError::Storage { .. } | DomainError::Internal { .. } => Self::unexpected(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nb_core::domain::entities::resource::ResourceKind;

    #[test]
    fn test_status_labels() {
        assert_eq!(ApiError::bad_request("x").status_label(), "fail");
        assert_eq!(ApiError::not_found("x").status_label(), "fail");
        assert_eq!(
            ApiError::new("x", StatusCode::SERVICE_UNAVAILABLE).status_label(),
            "error"
        );
    }

    #[test]
    fn test_domain_error_mapping() {
        let cases = [
            (DomainError::not_found(ResourceKind::Note, "abc"), StatusCode::NOT_FOUND),
            (DomainError::InvalidId { id: "1".into() }, StatusCode::BAD_REQUEST),
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::unauthorized("no"), StatusCode::UNAUTHORIZED),
            (
                DomainError::Upload(UploadError::TooLarge { limit: 1 }),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (DomainError::Upload(UploadError::TooManyFiles), StatusCode::BAD_REQUEST),
            (
                DomainError::Storage { message: "disk".into() },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (domain, status) in cases {
            assert_eq!(ApiError::from(domain).status(), status);
        }
    }

    #[test]
    fn test_not_found_message_names_id() {
        let err = ApiError::from(DomainError::not_found(ResourceKind::Category, "abc"));
        assert_eq!(err.message(), "no category for this id: abc");
        assert!(err.is_operational());
    }

    #[test]
    fn test_unexpected_keeps_cause() {
        let err = ApiError::from(DomainError::Internal { message: "boom".into() });

        assert!(!err.is_operational());
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.stack().contains("boom"));
    }
}
