//! Type definitions shared by the HTTP layer
//!
//! - `pagination` - Query coercion and list envelopes
//! - `response` - Single-resource and health envelopes

pub mod pagination;
pub mod response;

pub use pagination::{ListQuery, ListResponse, Pagination};
pub use response::{CreatedResponse, DataResponse, HealthResponse};
