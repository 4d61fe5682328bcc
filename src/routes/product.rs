//! Product routes: explicit (method, path) table.

use crate::handlers::{
    create_product, delete_product, get_product, list_products, list_products_by_availability,
    list_products_by_category, list_products_by_name, update_product,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route("/products/name/:name", get(list_products_by_name))
        .route("/products/category/:category", get(list_products_by_category))
        .route("/products/availability/:available", get(list_products_by_availability))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}
