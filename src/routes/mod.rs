//! Router assembly.

mod common;
mod product;
pub use common::{common_routes, INDEX_FILE};
pub use product::product_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest request body accepted, in bytes.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

/// Full application: common and product routes with tracing and a body size limit.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(&state))
        .merge(product_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES)),
        )
}
