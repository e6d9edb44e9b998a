//! Integration tests for the albums vertical slice
//!
//! Tests album CRUD through the repository including:
//! - ID assignment and fetch round trips
//! - Saving over an existing record
//! - Idempotent removal
//! - Insertion-ordered pagination
//! - Flushing the whole store


use digger_core::{AlbumId, AlbumRepository, DiggerError, PageRequest};
use test_helpers::*;

#[tokio::test]
async fn test_create_and_fetch() {
    let test_db = TestDb::new().await;
    let repo = test_db.repository();

    let created = repo
        .create(album("Sleep", "Dopesmoker"))
        .await
        .expect("Failed to create album");

    assert!(!created.entity_id.as_str().is_empty());
    assert_eq!(created.artist, "Sleep");

    let fetched = repo
        .fetch(&created.entity_id)
        .await
        .expect("Failed to fetch album")
        .expect("Album not found");

    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_ids_are_distinct() {
    let test_db = TestDb::new().await;
    let repo = test_db.repository();

    let a = repo.create(album("Sleep", "Holy Mountain")).await.unwrap();
    let b = repo.create(album("Sleep", "Holy Mountain")).await.unwrap();

    assert_ne!(a.entity_id, b.entity_id);
}

#[tokio::test]
async fn test_fetch_missing_is_none() {
    let test_db = TestDb::new().await;
    let repo = test_db.repository();

    let missing = repo.fetch(&AlbumId::new("nope")).await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_save_overwrites_fields() {
    let test_db = TestDb::new().await;
    let repo = test_db.repository();

    let mut created = repo.create(album("Kyuss", "Blues for the Red Sun")).await.unwrap();
    created.price = 45;
    created.for_sale = false;
    created.owner = Some("bob".to_string());

    repo.save(&created).await.expect("Failed to save album");

    let fetched = repo.fetch(&created.entity_id).await.unwrap().unwrap();
    assert_eq!(fetched.price, 45);
    assert!(!fetched.for_sale);
    assert_eq!(fetched.owner.as_deref(), Some("bob"));
    assert_eq!(fetched.title, "Blues for the Red Sun");
}

#[tokio::test]
async fn test_save_missing_is_not_found() {
    let test_db = TestDb::new().await;
    let repo = test_db.repository();

    let ghost = album("Nobody", "Nothing").with_id(AlbumId::new("ghost"));
    let err = repo.save(&ghost).await.unwrap_err();

    assert!(matches!(err, DiggerError::AlbumNotFound(id) if id.as_str() == "ghost"));
}

#[tokio::test]
async fn test_remove_is_idempotent() {
    let test_db = TestDb::new().await;
    let repo = test_db.repository();

    let created = repo.create(album("Om", "Pilgrimage")).await.unwrap();

    assert!(repo.remove(&created.entity_id).await.unwrap());
    assert!(!repo.remove(&created.entity_id).await.unwrap());
    assert!(repo.fetch(&created.entity_id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_page_follows_insertion_order() {
    let test_db = TestDb::new().await;
    let repo = test_db.repository();

    for i in 0..15 {
        repo.create(album("Various", &format!("Volume {}", i)))
            .await
            .unwrap();
    }

    let first = repo.page(PageRequest::default()).await.unwrap();
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].title, "Volume 0");
    assert_eq!(first[9].title, "Volume 9");

    let rest = repo.page(PageRequest::new(10, 10)).await.unwrap();
    assert_eq!(rest.len(), 5);
    assert_eq!(rest[0].title, "Volume 10");

    let past_end = repo.page(PageRequest::new(50, 10)).await.unwrap();
    assert!(past_end.is_empty());

    let empty = repo.page(PageRequest::new(0, 0)).await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn test_flush_all_empties_store() {
    let test_db = TestDb::new().await;
    let repo = test_db.repository();

    repo.create(album("Electric Wizard", "Dopethrone")).await.unwrap();
    repo.create(album("Electric Wizard", "Come My Fanatics")).await.unwrap();
    assert_eq!(digger_storage::albums::count(test_db.pool()).await.unwrap(), 2);

    repo.flush_all().await.unwrap();

    assert_eq!(digger_storage::albums::count(test_db.pool()).await.unwrap(), 0);
    assert!(repo.page(PageRequest::default()).await.unwrap().is_empty());
}
