//! Service-level handlers: health and version.

use crate::response::HealthBody;
use axum::Json;

/// GET /health
pub async fn health() -> Json<HealthBody> {
    Json(HealthBody::ok())
}

/// GET /version
pub async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
