//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// `{ data }` envelope for single-resource responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{ message, data }` envelope returned on create
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> CreatedResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: String,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(service: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            status: String::from("healthy"),
            service: service.into(),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_created_response_shape() {
        let body = serde_json::to_value(CreatedResponse::new("done", 42)).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "done", "data": 42 }));
    }

    #[test]
    fn test_data_response_shape() {
        let body = serde_json::to_value(DataResponse::new("x")).unwrap();
        assert_eq!(body, serde_json::json!({ "data": "x" }));
    }
}
