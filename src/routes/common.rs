//! Common routes: health, version, and the static landing page.

use crate::handlers::{health, version};
use crate::state::AppState;
use axum::{routing::get, routing::get_service, Router};
use tower_http::services::ServeFile;

pub const INDEX_FILE: &str = "index.html";

/// GET /health, GET /version, GET / (serves `index.html` from the static directory).
pub fn common_routes(state: &AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route(
            "/",
            get_service(ServeFile::new(state.static_dir.join(INDEX_FILE))),
        )
}
