use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::catalog::CatalogEntry;
use crate::domain::repositories::{CatalogRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of CatalogRepository
///
/// Provides persistence for catalog entries using SQLx against the single
/// `catalog` table.
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    /// Creates a new PostgresCatalogRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the catalog table if it does not exist.
    /// Called once at startup; failure is fatal for the process.
    pub async fn ensure_schema(&self) -> RepositoryResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS catalog (cid TEXT PRIMARY KEY, cname TEXT, cprereq TEXT)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Connectivity(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn insert(&self, entry: &CatalogEntry) -> RepositoryResult<()> {
        sqlx::query("INSERT INTO catalog (cid, cname, cprereq) VALUES ($1, $2, $3)")
            .bind(entry.id())
            .bind(entry.name())
            .bind(entry.prerequisite())
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    RepositoryError::ConstraintViolation(entry.id().to_string())
                }
                _ => RepositoryError::Connectivity(e.to_string()),
            })?;

        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> RepositoryResult<u64> {
        let result = sqlx::query("DELETE FROM catalog WHERE cid = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Connectivity(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<CatalogEntry> {
        let row: Option<(String, String, String)> =
            sqlx::query_as("SELECT cid, cname, cprereq FROM catalog WHERE cid = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| RepositoryError::Connectivity(e.to_string()))?;

        row.map(|(cid, cname, cprereq)| CatalogEntry::from_persistence(cid, cname, cprereq))
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn list_all(&self) -> RepositoryResult<Vec<CatalogEntry>> {
        let rows: Vec<(String, String, String)> =
            sqlx::query_as("SELECT cid, cname, cprereq FROM catalog")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| RepositoryError::Connectivity(e.to_string()))?;

        Ok(rows
            .into_iter()
            .map(|(cid, cname, cprereq)| CatalogEntry::from_persistence(cid, cname, cprereq))
            .collect())
    }
}
