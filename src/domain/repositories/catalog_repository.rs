use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::CatalogEntry;

/// Errors that can occur in the storage layer
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("course already exists: {0}")]
    ConstraintViolation(String),

    #[error("course not found: {0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Connectivity(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository trait for the course catalog
///
/// Defines the contract for persisting and retrieving catalog entries.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert a new entry; fails with `ConstraintViolation` if the id exists
    async fn insert(&self, entry: &CatalogEntry) -> RepositoryResult<()>;

    /// Delete an entry by id; returns the number of rows removed.
    /// Deleting an absent id is not an error, it removes 0 rows.
    async fn delete_by_id(&self, id: &str) -> RepositoryResult<u64>;

    /// Find an entry by id; fails with `NotFound` on a miss
    async fn find_by_id(&self, id: &str) -> RepositoryResult<CatalogEntry>;

    /// List all entries in database-determined order
    async fn list_all(&self) -> RepositoryResult<Vec<CatalogEntry>>;
}

/// Shared repository handle injected into the router as axum state
pub type DynCatalogRepository = Arc<dyn CatalogRepository>;
