//! In-process store for development and tests. Ids are assigned from 1 upward and never reused.

use super::{ProductFilter, ProductStore};
use crate::error::AppError;
use crate::model::Product;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Rows {
    next_id: i64,
    by_id: BTreeMap<i64, Product>,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryProductStore {
    rows: Arc<RwLock<Rows>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, product: &Product) -> Result<i64, AppError> {
        let mut rows = self.rows.write().await;
        rows.next_id += 1;
        let id = rows.next_id;
        let mut stored = product.clone();
        stored.id = Some(id);
        rows.by_id.insert(id, stored);
        Ok(id)
    }

    async fn update(&self, id: i64, product: &Product) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let stored = rows
            .by_id
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))?;
        *stored = product.clone();
        stored.id = Some(id);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        rows.by_id
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound(format!("product {}", id)))
    }

    async fn fetch_one(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.rows.read().await.by_id.get(&id).cloned())
    }

    async fn fetch_many(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        let rows = self.rows.read().await;
        Ok(rows.by_id.values().filter(|p| filter.matches(p)).cloned().collect())
    }
}
