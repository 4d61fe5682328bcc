//! Persistence seam for products. Handlers receive a store through [`crate::state::AppState`];
//! model methods take it as an argument.

mod memory;
mod postgres;

use crate::error::AppError;
use crate::model::{Category, Product};
use async_trait::async_trait;

pub use memory::InMemoryProductStore;
pub use postgres::PgProductStore;

/// Exact-match predicate for listing products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductFilter {
    All,
    Name(String),
    Category(Category),
    Available(bool),
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductFilter::All => true,
            ProductFilter::Name(name) => product.name == *name,
            ProductFilter::Category(category) => product.category == *category,
            ProductFilter::Available(available) => product.available == *available,
        }
    }
}

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new row from the product's fields (its id is ignored) and return the generated id.
    async fn insert(&self, product: &Product) -> Result<i64, AppError>;

    /// Overwrite every column of row `id`. `NotFound` if no such row.
    async fn update(&self, id: i64, product: &Product) -> Result<(), AppError>;

    /// Remove row `id`. `NotFound` if no such row.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    async fn fetch_one(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Matching rows in ascending id order.
    async fn fetch_many(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError>;
}
