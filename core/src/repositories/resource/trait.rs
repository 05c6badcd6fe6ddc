//! Resource repository trait defining the interface for record persistence.
//!
//! One repository instance serves one collection (categories or notes).
//! The trait is async-first and reports store failures as `DomainError`.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::resource::{Resource, ResourceChanges};
use crate::errors::DomainError;

/// Repository trait for resource persistence operations
#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Fetch one page of records in creation order
    ///
    /// # Arguments
    /// * `skip` - Number of records to skip
    /// * `limit` - Maximum number of records to return
    async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<Resource>, DomainError>;

    /// Find a record by its identifier
    ///
    /// # Returns
    /// * `Ok(Some(Resource))` - Record found
    /// * `Ok(None)` - No record with the given id
    /// * `Err(DomainError)` - Store failure
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, DomainError>;

    /// Persist a new record
    async fn create(&self, resource: Resource) -> Result<Resource, DomainError>;

    /// Apply a partial update and return the updated record
    ///
    /// Returns `Ok(None)` when the record disappeared before the write.
    async fn update(
        &self,
        id: Uuid,
        changes: &ResourceChanges,
    ) -> Result<Option<Resource>, DomainError>;

    /// Delete a record, returning whether it existed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
