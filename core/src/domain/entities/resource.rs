//! Resource entity shared by categories and notes.

use chrono::{DateTime, Utc};
use nb_shared::slugify;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Longest accepted name, in characters; matches the `name` column width
pub const MAX_NAME_LENGTH: usize = 255;

/// The two CRUD collections exposed by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Category,
    Note,
}

impl ResourceKind {
    /// Table backing this kind
    pub fn table(&self) -> &'static str {
        match self {
            ResourceKind::Category => "categories",
            ResourceKind::Note => "notes",
        }
    }

    /// Relative directory holding this kind's images
    pub fn upload_dir(&self) -> &'static str {
        match self {
            ResourceKind::Category => "uploads/categories",
            ResourceKind::Note => "uploads/notes",
        }
    }

    /// Lowercase singular name used in messages
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Category => "category",
            ResourceKind::Note => "note",
        }
    }

    /// Capitalized singular name
    pub fn title(&self) -> &'static str {
        match self {
            ResourceKind::Category => "Category",
            ResourceKind::Note => "Note",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A category or note record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique identifier
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Lowercase-hyphenated form of `name`
    pub slug: String,

    /// Relative storage path of the attached image, empty when none
    pub image: String,

    /// Timestamp when the resource was created
    pub created_at: DateTime<Utc>,
}

impl Resource {
    /// Creates a new resource, deriving its slug from `name`
    pub fn new(name: impl Into<String>, image: Option<String>) -> Self {
        let name = name.into();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&name),
            name,
            image: image.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    /// Whether a file is attached
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }

    /// Applies a partial update in place
    pub fn apply(&mut self, changes: &ResourceChanges) {
        if let Some(name) = &changes.name {
            self.name = name.clone();
            self.slug = changes.slug.clone().unwrap_or_else(|| slugify(name));
        }
        if let Some(image) = &changes.image {
            self.image = image.clone();
        }
    }
}

/// Partial update of a resource
///
/// The slug is derived here and cannot be set by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceChanges {
    name: Option<String>,
    slug: Option<String>,
    image: Option<String>,
}

impl ResourceChanges {
    pub fn new(name: Option<String>, image: Option<String>) -> Self {
        let slug = name.as_deref().map(slugify);
        Self { name, slug, image }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// True when nothing would change
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.image.is_none()
    }
}
