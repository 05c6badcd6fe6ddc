//! Business services containing domain logic and use cases.

pub mod resource;
pub mod token;
pub mod upload;

// Re-export commonly used types
pub use resource::{ResourceInput, ResourceService};
pub use token::{TokenService, TokenServiceConfig};
pub use upload::{ImageStore, UploadPolicy, UploadedImage};
