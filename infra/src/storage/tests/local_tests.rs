//! Unit tests for the local image store

use std::collections::HashSet;
use std::sync::Arc;

use nb_core::domain::entities::resource::ResourceKind;
use nb_core::errors::DomainError;
use nb_core::services::upload::{ImageStore, UploadedImage};
use tempfile::TempDir;

use crate::storage::local::{sanitize_file_name, LocalImageStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

fn png(name: &str) -> UploadedImage {
    UploadedImage::new(name, "image/png", b"\x89PNG fake".to_vec())
}

#[tokio::test]
async fn test_save_writes_under_kind_dir() {
    init_tracing();
    let dir = TempDir::new().unwrap();
    let store = LocalImageStore::new(dir.path());

    let path = store.save(ResourceKind::Category, &png("sofa.png")).await.unwrap();

    assert!(path.starts_with("uploads/categories/"));
    assert!(path.ends_with("-sofa.png"));
    let written = std::fs::read(dir.path().join(&path)).unwrap();
    assert_eq!(written, b"\x89PNG fake");
}

#[tokio::test]
async fn test_names_are_unique_within_a_millisecond() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(LocalImageStore::new(dir.path()));

    let mut handles = Vec::new();
    for _ in 0..20 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store.save(ResourceKind::Note, &png("same.png")).await.unwrap()
        }));
    }

    let mut paths = HashSet::new();
    for handle in handles {
        paths.insert(handle.await.unwrap());
    }
    assert_eq!(paths.len(), 20);
    assert_eq!(std::fs::read_dir(dir.path().join("uploads/notes")).unwrap().count(), 20);
}

#[tokio::test]
async fn test_remove_existing_and_missing() {
    let dir = TempDir::new().unwrap();
    let store = LocalImageStore::new(dir.path());
    let path = store.save(ResourceKind::Note, &png("a.png")).await.unwrap();

    assert!(store.remove(&path).await.unwrap());
    assert!(!dir.path().join(&path).exists());
    assert!(!store.remove(&path).await.unwrap());
}

#[tokio::test]
async fn test_remove_rejects_paths_outside_uploads() {
    let dir = TempDir::new().unwrap();
    let store = LocalImageStore::new(dir.path());
    std::fs::write(dir.path().join("secret.txt"), b"keep").unwrap();

    for path in ["uploads/../secret.txt", "/etc/passwd", "secret.txt", "uploads"] {
        let err = store.remove(path).await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }), "{}", path);
    }
    assert!(dir.path().join("secret.txt").exists());
}

#[test]
fn test_sanitize_file_name() {
    assert_eq!(sanitize_file_name("photo.png"), "photo.png");
    assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_file_name("C:\\pics\\my cat.jpg"), "my_cat.jpg");
    assert_eq!(sanitize_file_name(".hidden"), "hidden");
    assert_eq!(sanitize_file_name(""), "image");
}
