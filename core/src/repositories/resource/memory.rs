//! In-memory implementation of ResourceRepository
//!
//! Used by tests and by local runs without a database.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::resource::{Resource, ResourceChanges};
use crate::errors::DomainError;

use super::trait_::ResourceRepository;

/// Insertion-ordered resource store
#[derive(Clone, Default)]
pub struct InMemoryResourceRepository {
    resources: Arc<RwLock<Vec<Resource>>>,
}

impl InMemoryResourceRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.resources.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.resources.read().await.is_empty()
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResourceRepository {
    async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<Resource>, DomainError> {
        let resources = self.resources.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        Ok(resources
            .iter()
            .skip(skip)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resource>, DomainError> {
        let resources = self.resources.read().await;
        Ok(resources.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, resource: Resource) -> Result<Resource, DomainError> {
        let mut resources = self.resources.write().await;

        if resources.iter().any(|r| r.id == resource.id) {
            return Err(DomainError::Internal {
                message: format!("duplicate id {}", resource.id),
            });
        }

        resources.push(resource.clone());
        Ok(resource)
    }

    async fn update(
        &self,
        id: Uuid,
        changes: &ResourceChanges,
    ) -> Result<Option<Resource>, DomainError> {
        let mut resources = self.resources.write().await;
        Ok(resources.iter_mut().find(|r| r.id == id).map(|resource| {
            resource.apply(changes);
            resource.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut resources = self.resources.write().await;
        let before = resources.len();
        resources.retain(|r| r.id != id);
        Ok(resources.len() != before)
    }
}
