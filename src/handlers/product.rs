//! Product handlers: validate, parse, delegate to the model, respond.

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::{Category, Product};
use crate::response::{product_created, product_list, product_ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid product id: {}", id_str)))
}

fn parse_availability(s: &str) -> Result<bool, AppError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(AppError::BadRequest(format!("invalid availability: {}", s))),
    }
}

async fn find_or_404(state: &AppState, id: i64) -> Result<Product, AppError> {
    Product::find(&*state.store, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product with id {} not found", id)))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(data): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Request to Create a Product...");
    tracing::debug!(payload = %data, "processing");
    let mut product = Product::deserialize(&data)?;
    let id = product.create(&*state.store).await?;
    tracing::info!(id, "Product with new id [{}] saved!", id);
    Ok(product_created(&product))
}

/// GET /products
pub async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::info!("Request to list all Products...");
    let products = Product::all(&*state.store).await?;
    Ok(product_list(&products))
}

/// GET /products/name/:name
pub async fn list_products_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(%name, "Request to list Products by name...");
    let products = Product::find_by_name(&*state.store, &name).await?;
    if products.is_empty() {
        return Err(AppError::NotFound(format!("No products found with name '{}'", name)));
    }
    Ok(product_list(&products))
}

/// GET /products/category/:category. An unrecognised category cannot match any row, so it is a 404
/// like any other empty result.
pub async fn list_products_by_category(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::info!(category = %raw, "Request to list Products by category...");
    let not_found = || AppError::NotFound(format!("No products found in category '{}'", raw));
    let category: Category = raw.parse().map_err(|_| not_found())?;
    let products = Product::find_by_category(&*state.store, category).await?;
    if products.is_empty() {
        return Err(not_found());
    }
    Ok(product_list(&products))
}

/// GET /products/availability/:available
pub async fn list_products_by_availability(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let available = parse_availability(&raw)?;
    tracing::info!(available, "Request to list Products by availability...");
    let products = Product::find_by_availability(&*state.store, available).await?;
    if products.is_empty() {
        return Err(AppError::NotFound(format!(
            "No products found with availability status '{}'",
            available
        )));
    }
    Ok(product_list(&products))
}

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    tracing::info!(id, "Request to Retrieve a Product...");
    let product = find_or_404(&state, id).await?;
    Ok(product_ok(&product))
}

/// PUT /products/:id. Fields absent from the body keep their stored values.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonBody(data): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    tracing::info!(id, "Request to Update a Product...");
    let mut product = find_or_404(&state, id).await?;
    product.deserialize_into(&data)?;
    product.update(&*state.store).await?;
    Ok(product_ok(&product))
}

/// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    tracing::info!(id, "Request to Delete a Product...");
    let product = find_or_404(&state, id).await?;
    product.delete(&*state.store).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn availability_accepts_words_and_digits() {
        assert!(parse_availability("TRUE").unwrap());
        assert!(parse_availability("1").unwrap());
        assert!(!parse_availability("false").unwrap());
        assert!(matches!(parse_availability("maybe"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(AppError::BadRequest(_))));
    }
}
