//! Main resource service implementation

use std::sync::Arc;

use nb_shared::{ListResponse, Pagination};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::entities::resource::{Resource, ResourceChanges, ResourceKind, MAX_NAME_LENGTH};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::ResourceRepository;
use crate::services::upload::{ImageStore, UploadedImage};

/// Fields accepted by create and update
#[derive(Debug, Clone, Default)]
pub struct ResourceInput {
    pub name: Option<String>,
    pub image: Option<UploadedImage>,
}

impl ResourceInput {
    pub fn new(name: Option<String>, image: Option<UploadedImage>) -> Self {
        Self { name, image }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            image: None,
        }
    }

    pub fn with_image(mut self, image: UploadedImage) -> Self {
        self.image = Some(image);
        self
    }

    /// Trimmed name, `None` when absent or blank
    fn name(&self) -> Option<String> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

/// CRUD operations for one resource kind
pub struct ResourceService<R: ResourceRepository, S: ImageStore> {
    kind: ResourceKind,
    repository: Arc<R>,
    store: Arc<S>,
}

impl<R: ResourceRepository, S: ImageStore> Clone for ResourceService<R, S> {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            repository: Arc::clone(&self.repository),
            store: Arc::clone(&self.store),
        }
    }
}

impl<R: ResourceRepository, S: ImageStore> ResourceService<R, S> {
    /// Creates a new resource service
    ///
    /// # Arguments
    ///
    /// * `kind` - Collection served by this instance
    /// * `repository` - Record persistence for that collection
    /// * `store` - Image file storage
    pub fn new(kind: ResourceKind, repository: Arc<R>, store: Arc<S>) -> Self {
        Self {
            kind,
            repository,
            store,
        }
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// Returns one page of resources in creation order
    ///
    /// `total` in the result counts the returned items only.
    pub async fn list(&self, pagination: Pagination) -> DomainResult<ListResponse<Resource>> {
        let resources = self
            .repository
            .find_page(pagination.skip(), pagination.limit)
            .await?;

        debug!(
            kind = %self.kind,
            page = pagination.page,
            returned = resources.len(),
            "Listed resources"
        );

        Ok(ListResponse::new(resources, pagination))
    }

    /// Loads a single resource
    ///
    /// # Returns
    ///
    /// * `Ok(Resource)` - The resource
    /// * `Err(DomainError::InvalidId)` - `id` is not a UUID; the store is not queried
    /// * `Err(DomainError::NotFound)` - No resource with that id
    pub async fn get(&self, id: &str) -> DomainResult<Resource> {
        let uuid = parse_id(id)?;
        self.load(uuid, id).await
    }

    /// Creates a resource, storing the attached image first
    ///
    /// If the insert fails the freshly written file is removed.
    pub async fn create(&self, input: ResourceInput) -> DomainResult<Resource> {
        let name = self.checked_name(&input)?.ok_or_else(|| {
            DomainError::validation(format!("{} name is required", self.kind.title()))
        })?;

        let image = match &input.image {
            Some(upload) => Some(self.store.save(self.kind, upload).await?),
            None => None,
        };

        let resource = Resource::new(name, image.clone());
        match self.repository.create(resource).await {
            Ok(created) => {
                info!(kind = %self.kind, id = %created.id, slug = %created.slug, "Resource created");
                Ok(created)
            }
            Err(e) => {
                if let Some(path) = image {
                    self.discard(&path).await;
                }
                Err(e)
            }
        }
    }

    /// Applies a partial update
    ///
    /// Returns `NotFound` before touching the store or the disk when the
    /// resource does not exist. A blank name counts as not supplied. When a
    /// new image is attached, the previous one is removed after the record
    /// update succeeds.
    pub async fn update(&self, id: &str, input: ResourceInput) -> DomainResult<Resource> {
        let uuid = parse_id(id)?;
        let existing = self.load(uuid, id).await?;
        let name = self.checked_name(&input)?;

        let new_image = match &input.image {
            Some(upload) => Some(self.store.save(self.kind, upload).await?),
            None => None,
        };

        let changes = ResourceChanges::new(name, new_image.clone());
        if changes.is_empty() {
            return Ok(existing);
        }

        let updated = match self.repository.update(uuid, &changes).await {
            Ok(Some(updated)) => updated,
            Ok(None) => {
                if let Some(path) = &new_image {
                    self.discard(path).await;
                }
                return Err(DomainError::not_found(self.kind, id));
            }
            Err(e) => {
                if let Some(path) = &new_image {
                    self.discard(path).await;
                }
                return Err(e);
            }
        };

        if new_image.is_some() && existing.has_image() && existing.image != updated.image {
            self.discard(&existing.image).await;
        }

        info!(kind = %self.kind, id = %updated.id, "Resource updated");
        Ok(updated)
    }

    /// Deletes the record, then its image
    pub async fn delete(&self, id: &str) -> DomainResult<()> {
        let uuid = parse_id(id)?;
        let existing = self.load(uuid, id).await?;

        if !self.repository.delete(uuid).await? {
            return Err(DomainError::not_found(self.kind, id));
        }

        if existing.has_image() {
            self.discard(&existing.image).await;
        }

        info!(kind = %self.kind, id = %uuid, "Resource deleted");
        Ok(())
    }

    /// Trimmed name, rejected when longer than the store accepts
    fn checked_name(&self, input: &ResourceInput) -> DomainResult<Option<String>> {
        match input.name() {
            Some(name) if name.chars().count() > MAX_NAME_LENGTH => Err(DomainError::validation(format!(
                "{} name must be at most {} characters",
                self.kind.title(),
                MAX_NAME_LENGTH
            ))),
            name => Ok(name),
        }
    }

    async fn load(&self, uuid: Uuid, raw_id: &str) -> DomainResult<Resource> {
        self.repository
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| DomainError::not_found(self.kind, raw_id))
    }

    /// Best-effort file removal; failures are logged and swallowed
    async fn discard(&self, path: &str) {
        match self.store.remove(path).await {
            Ok(true) => debug!(kind = %self.kind, path, "Removed image"),
            Ok(false) => debug!(kind = %self.kind, path, "Image already gone"),
            Err(e) => warn!(kind = %self.kind, path, error = %e, "Failed to remove image"),
        }
    }
}

fn parse_id(id: &str) -> DomainResult<Uuid> {
    Uuid::parse_str(id.trim()).map_err(|_| DomainError::InvalidId { id: id.to_string() })
}
