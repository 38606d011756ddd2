//! Integration tests for the Postgres repository
//!
//! These tests verify the repository against a real PostgreSQL database.
//! They require `DATABASE_URL` to point at a reachable instance and skip
//! themselves otherwise. Each test uses unique course ids so tests can run
//! concurrently against a shared database.

use sqlx::PgPool;
use uuid::Uuid;

use catalog_api::domain::catalog::CatalogEntry;
use catalog_api::domain::repositories::{CatalogRepository, RepositoryError};
use catalog_api::infrastructure::repositories::PostgresCatalogRepository;

/// Set up a repository over the test database, or None to skip
async fn setup_repo() -> Option<PostgresCatalogRepository> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping repository integration test");
        return None;
    };

    let pool = PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    let repo = PostgresCatalogRepository::new(pool);
    repo.ensure_schema()
        .await
        .expect("Failed to create catalog table");

    Some(repo)
}

fn unique_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4())
}

#[tokio::test]
async fn insert_and_find_round_trip() {
    let Some(repo) = setup_repo().await else { return };

    let id = unique_id("C101");
    let entry = CatalogEntry::new(&id, "Intro to Programming", "").expect("valid entry");

    repo.insert(&entry).await.expect("Failed to insert entry");

    let found = repo.find_by_id(&id).await.expect("Failed to find entry");
    assert_eq!(found, entry);

    repo.delete_by_id(&id).await.expect("Failed to cleanup");
}

#[tokio::test]
async fn insert_duplicate_id_is_constraint_violation() {
    let Some(repo) = setup_repo().await else { return };

    let id = unique_id("C101");
    let entry = CatalogEntry::new(&id, "Intro", "").expect("valid entry");

    repo.insert(&entry).await.expect("First insert should succeed");

    let err = repo
        .insert(&entry)
        .await
        .expect_err("Second insert should fail");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    repo.delete_by_id(&id).await.expect("Failed to cleanup");
}

#[tokio::test]
async fn delete_reports_rows_removed() {
    let Some(repo) = setup_repo().await else { return };

    let id = unique_id("C101");
    let entry = CatalogEntry::new(&id, "Intro", "").expect("valid entry");
    repo.insert(&entry).await.expect("Failed to insert entry");

    let removed = repo.delete_by_id(&id).await.expect("Failed to delete");
    assert_eq!(removed, 1);

    // Deleting an absent id succeeds but removes nothing
    let removed = repo.delete_by_id(&id).await.expect("Delete should succeed");
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn find_missing_id_is_not_found() {
    let Some(repo) = setup_repo().await else { return };

    let id = unique_id("missing");
    let err = repo.find_by_id(&id).await.expect_err("Find should fail");

    assert!(matches!(err, RepositoryError::NotFound(_)));
}

#[tokio::test]
async fn list_contains_inserted_entries() {
    let Some(repo) = setup_repo().await else { return };

    let first = CatalogEntry::new(unique_id("C101"), "Intro", "").expect("valid entry");
    let second =
        CatalogEntry::new(unique_id("C201"), "Algorithms", first.id()).expect("valid entry");

    repo.insert(&first).await.expect("Failed to insert entry");
    repo.insert(&second).await.expect("Failed to insert entry");

    let all = repo.list_all().await.expect("Failed to list entries");
    assert!(all.contains(&first));
    assert!(all.contains(&second));

    repo.delete_by_id(first.id()).await.expect("Failed to cleanup");
    repo.delete_by_id(second.id()).await.expect("Failed to cleanup");
}
