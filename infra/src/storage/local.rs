//! Local filesystem implementation of `ImageStore`

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use nb_core::domain::entities::resource::ResourceKind;
use nb_core::errors::DomainError;
use nb_core::services::upload::{ImageStore, UploadedImage};

use crate::InfrastructureError;

/// Public prefix every stored path starts with
const UPLOADS_PREFIX: &str = "uploads";

/// Attempts before giving up on a name collision
const MAX_NAME_ATTEMPTS: usize = 8;

/// Disk-backed image store
pub struct LocalImageStore {
    /// Directory that contains the `uploads/` tree
    root: PathBuf,
    /// Last millisecond prefix handed out
    last_prefix: AtomicU64,
}

impl LocalImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            last_prefix: AtomicU64::new(0),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory served at `/uploads`
    pub fn uploads_dir(&self) -> PathBuf {
        self.root.join(UPLOADS_PREFIX)
    }

    /// Strictly increasing millisecond prefix
    ///
    /// Falls back to `last + 1` when several files arrive within one
    /// millisecond or the clock steps backwards.
    fn next_prefix(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut last = self.last_prefix.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self.last_prefix.compare_exchange_weak(
                last,
                next,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }

    /// Resolve a stored relative path to a location on disk
    ///
    /// Only plain relative paths inside `uploads/` are accepted.
    fn resolve(&self, relative: &str) -> Result<PathBuf, InfrastructureError> {
        let path = Path::new(relative);
        let mut components = path.components();

        let inside_uploads = matches!(
            components.next(),
            Some(Component::Normal(first)) if first == UPLOADS_PREFIX
        );
        let plain = path.components().all(|c| matches!(c, Component::Normal(_)));

        if !inside_uploads || !plain || components.next().is_none() {
            return Err(InfrastructureError::Config(format!(
                "refusing to touch path outside the upload tree: {}",
                relative
            )));
        }

        Ok(self.root.join(path))
    }

    async fn write_new(&self, kind: ResourceKind, image: &UploadedImage) -> Result<String, InfrastructureError> {
        let dir = self.root.join(kind.upload_dir());
        fs::create_dir_all(&dir).await?;

        let base = sanitize_file_name(&image.file_name);

        for _ in 0..MAX_NAME_ATTEMPTS {
            let file_name = format!("{}-{}", self.next_prefix(), base);
            let target = dir.join(&file_name);

            let mut file = match fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&target)
                .await
            {
                Ok(file) => file,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };

            if let Err(e) = write_all(&mut file, &image.bytes).await {
                drop(file);
                let _ = fs::remove_file(&target).await;
                return Err(e.into());
            }

            return Ok(format!("{}/{}", kind.upload_dir(), file_name));
        }

        Err(InfrastructureError::Io(std::io::Error::new(
            ErrorKind::AlreadyExists,
            "could not find a free file name",
        )))
    }
}

async fn write_all(file: &mut fs::File, bytes: &[u8]) -> std::io::Result<()> {
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await
}

/// Reduce a client-supplied name to a safe single path segment
pub fn sanitize_file_name(original: &str) -> String {
    let last_segment = original
        .rsplit(|c| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    let cleaned: String = last_segment
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "image".to_string()
    } else {
        cleaned.to_string()
    }
}

#[async_trait]
impl ImageStore for LocalImageStore {
    async fn save(&self, kind: ResourceKind, image: &UploadedImage) -> Result<String, DomainError> {
        let path = self.write_new(kind, image).await.map_err(|e| {
            tracing::error!(kind = %kind, error = %e, "Failed to store image");
            DomainError::from(e)
        })?;

        tracing::info!(
            kind = %kind,
            path = %path,
            content_type = %image.content_type,
            bytes = image.bytes.len(),
            "Stored image"
        );
        Ok(path)
    }

    async fn remove(&self, path: &str) -> Result<bool, DomainError> {
        let target = self.resolve(path)?;

        match fs::remove_file(&target).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(InfrastructureError::Io(e).into()),
        }
    }
}
