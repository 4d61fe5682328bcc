//! Response helpers: product bodies are the bare serialized record, lists are bare arrays.

use crate::model::Product;
use axum::{
    http::{header::LOCATION, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
pub struct HealthBody {
    pub status: u16,
    pub message: &'static str,
}

impl HealthBody {
    pub fn ok() -> Self {
        HealthBody {
            status: StatusCode::OK.as_u16(),
            message: "OK",
        }
    }
}

/// 201 with `Location: /products/<id>`.
pub fn product_created(product: &Product) -> Response {
    let location = product
        .id
        .map(|id| format!("/products/{}", id))
        .unwrap_or_else(|| "/products".into());
    (
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(product.serialize()),
    )
        .into_response()
}

pub fn product_ok(product: &Product) -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(product.serialize()))
}

pub fn product_list(products: &[Product]) -> (StatusCode, Json<Value>) {
    let data: Vec<Value> = products.iter().map(Product::serialize).collect();
    (StatusCode::OK, Json(Value::Array(data)))
}
