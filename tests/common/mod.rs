//! Shared helpers for router tests.

#![allow(dead_code)]

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use product_store::{app, AppState, InMemoryProductStore};
use serde_json::Value;
use tower::ServiceExt; // oneshot

pub const STATIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

pub const FEDORA: &str = r#"{"name":"Fedora","description":"A red hat","price":12.50,"available":true,"category":"CLOTHS"}"#;

pub fn test_app() -> Router {
    app(AppState::new(InMemoryProductStore::new(), STATIC_DIR))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Option<&str>,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header("content-type", ct);
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    TestResponse { status, headers, body }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::POST, uri, Some("application/json"), Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &str) -> TestResponse {
    send(app, Method::PUT, uri, Some("application/json"), Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::DELETE, uri, None, None).await
}

/// POST a product and return its generated id.
pub async fn create(app: &Router, body: &str) -> i64 {
    let res = post_json(app, "/products", body).await;
    assert_eq!(res.status, StatusCode::CREATED, "{}", String::from_utf8_lossy(&res.body));
    res.json()["id"].as_i64().unwrap()
}

pub fn product_json(name: &str, price: &str, available: bool, category: &str) -> String {
    format!(
        r#"{{"name":"{name}","description":"{name} description","price":{price},"available":{available},"category":"{category}"}}"#
    )
}
