//! Image store port

use async_trait::async_trait;

use crate::domain::entities::resource::ResourceKind;
use crate::errors::DomainError;

use super::policy::UploadedImage;

/// Persistence for attached image files
///
/// Paths handed out and accepted here are relative storage paths of the
/// form `uploads/<dir>/<file>`, exactly what is stored on the record.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Write the image under the kind's directory and return its relative path
    ///
    /// Never overwrites an existing file.
    async fn save(&self, kind: ResourceKind, image: &UploadedImage) -> Result<String, DomainError>;

    /// Remove a previously saved file
    ///
    /// # Returns
    /// * `Ok(true)` - File removed
    /// * `Ok(false)` - Nothing to remove
    /// * `Err(DomainError)` - Filesystem failure or a path outside the upload tree
    async fn remove(&self, path: &str) -> Result<bool, DomainError>;
}
