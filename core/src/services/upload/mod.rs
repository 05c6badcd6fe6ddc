//! Image upload module
//!
//! This module holds everything the lifecycle service needs to know about
//! attached images:
//! - `UploadPolicy` for MIME and size checks
//! - `UploadedImage` for a fully buffered, accepted file part
//! - `ImageStore` for persisting and removing files

mod policy;
mod store;

#[cfg(test)]
mod tests;

pub use policy::{UploadPolicy, UploadedImage};
pub use store::ImageStore;
