use axum::{extract::State, http::Uri};

use crate::api::errors::ApiError;
use crate::api::paths::PathPattern;
use crate::domain::catalog::CatalogEntry;
use crate::domain::repositories::DynCatalogRepository;

const SEARCH: PathPattern = PathPattern::new("search", &["id"]);
const INSERT: PathPattern = PathPattern::new("insert", &["id", "name", "prereq"]);
const DELETE: PathPattern = PathPattern::new("delete", &["id"]);

/// Greeting for the root path
///
/// Route: /
pub async fn greet() -> &'static str {
    "Thanks for visiting!\n"
}

/// List every catalog entry, one line each
///
/// Route: /list
pub async fn list_courses(
    State(repo): State<DynCatalogRepository>,
) -> Result<String, ApiError> {
    let entries = repo.list_all().await.map_err(|e| {
        ApiError::internal_server_error(format!("Error retrieving course list: {}", e))
    })?;

    Ok(entries.iter().map(CatalogEntry::line).collect())
}

/// Report the total number of catalog entries
///
/// Route: /status
pub async fn status(State(repo): State<DynCatalogRepository>) -> Result<String, ApiError> {
    let entries = repo.list_all().await.map_err(|e| {
        ApiError::internal_server_error(format!("Error retrieving course list: {}", e))
    })?;

    Ok(format!("Total entries: {}\n", entries.len()))
}

/// Look up a single entry by course id
///
/// Route: /search/{id}
pub async fn search_course(
    State(repo): State<DynCatalogRepository>,
    uri: Uri,
) -> Result<String, ApiError> {
    let params = SEARCH
        .capture(uri.path())
        .map_err(|_| ApiError::not_found(format!("Not found: {}", uri.path())))?;

    let id = params.get("id");
    let entry = repo
        .find_by_id(id)
        .await
        .map_err(|_| ApiError::not_found(format!("Not found: {}", id)))?;

    Ok(entry.line())
}

/// Create a new catalog entry from path segments
///
/// Route: /insert/{id}/{name}/{prereq}
pub async fn insert_course(
    State(repo): State<DynCatalogRepository>,
    uri: Uri,
) -> Result<String, ApiError> {
    let params = INSERT
        .capture(uri.path())
        .map_err(|_| ApiError::not_found(format!("Not enough arguments: {}", uri.path())))?;

    let entry = CatalogEntry::new(params.get("id"), params.get("name"), params.get("prereq"))
        .map_err(ApiError::bad_request)?;

    repo.insert(&entry)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to add course: {}", e)))?;

    Ok(format!("New record added successfully: {}\n", entry.id()))
}

/// Delete a catalog entry by course id
///
/// Route: /delete/{id}
pub async fn delete_course(
    State(repo): State<DynCatalogRepository>,
    uri: Uri,
) -> Result<String, ApiError> {
    let params = DELETE
        .capture(uri.path())
        .map_err(|_| ApiError::not_found(format!("Not found: {}", uri.path())))?;

    let id = params.get("id");
    let removed = repo
        .delete_by_id(id)
        .await
        .map_err(|e| ApiError::not_found(e.to_string()))?;

    // The DELETE statement succeeds for absent ids; 0 rows means there was
    // nothing to remove, which the client sees as not found.
    if removed == 0 {
        return Err(ApiError::not_found(format!("Not found: {}", id)));
    }

    Ok(format!("{} deleted!\n", id))
}
