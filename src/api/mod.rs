// API layer module (HTTP adapter over the domain)

pub mod errors;
pub mod handlers;
pub mod paths;

use std::time::Duration;

use axum::{
    extract::State,
    http::Uri,
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use self::handlers::catalog;
use crate::domain::repositories::DynCatalogRepository;

/// Per-request time budget; stands in for the legacy fixed
/// idle/read/write connection timeouts.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the service router over a storage accessor.
///
/// `/list` and `/status` are exact-match routes; everything else goes
/// through the prefix dispatcher so that malformed parameterized paths
/// still reach their handler (and its explanatory error line) and any
/// unmatched path gets the greeting, as the legacy service did. All
/// routes accept every HTTP method, also legacy behavior.
pub fn router(repo: DynCatalogRepository) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/list", any(catalog::list_courses))
        .route("/status", any(catalog::status))
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(cors)
        .with_state(repo)
}

/// Maps the parameterized path prefixes to their handlers; see
/// `api::paths` for how segments bind. Paths under no known prefix are
/// greeted, matching the legacy root handler.
async fn dispatch(State(repo): State<DynCatalogRepository>, uri: Uri) -> Response {
    let path = uri.path();

    if path == "/search" || path.starts_with("/search/") {
        catalog::search_course(State(repo), uri).await.into_response()
    } else if path == "/insert" || path.starts_with("/insert/") {
        catalog::insert_course(State(repo), uri).await.into_response()
    } else if path == "/delete" || path.starts_with("/delete/") {
        catalog::delete_course(State(repo), uri).await.into_response()
    } else {
        catalog::greet().await.into_response()
    }
}
