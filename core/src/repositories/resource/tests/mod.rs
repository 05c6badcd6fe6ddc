//! Unit tests for the in-memory resource repository

use uuid::Uuid;

use crate::domain::entities::resource::{Resource, ResourceChanges};
use crate::repositories::resource::{InMemoryResourceRepository, ResourceRepository};

async fn seeded(count: usize) -> (InMemoryResourceRepository, Vec<Resource>) {
    let repo = InMemoryResourceRepository::new();
    let mut created = Vec::new();
    for i in 0..count {
        created.push(repo.create(Resource::new(format!("Item {}", i), None)).await.unwrap());
    }
    (repo, created)
}

#[tokio::test]
async fn test_create_and_find() {
    let (repo, created) = seeded(1).await;

    let found = repo.find_by_id(created[0].id).await.unwrap();
    assert_eq!(found, Some(created[0].clone()));
    assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
async fn test_pages_follow_insertion_order() {
    let (repo, created) = seeded(6).await;

    let first = repo.find_page(0, 4).await.unwrap();
    assert_eq!(first.len(), 4);
    assert_eq!(first[0].id, created[0].id);

    let second = repo.find_page(4, 4).await.unwrap();
    assert_eq!(second.len(), 2);
    assert_eq!(second[1].id, created[5].id);

    assert!(repo.find_page(40, 4).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_applies_changes() {
    let (repo, created) = seeded(1).await;

    let updated = repo
        .update(created[0].id, &ResourceChanges::new(Some("Renamed Item".to_string()), None))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.slug, "renamed-item");

    let missing = repo
        .update(Uuid::new_v4(), &ResourceChanges::new(Some("x".to_string()), None))
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_delete() {
    let (repo, created) = seeded(2).await;

    assert!(repo.delete(created[0].id).await.unwrap());
    assert!(!repo.delete(created[0].id).await.unwrap());
    assert_eq!(repo.len().await, 1);
}
