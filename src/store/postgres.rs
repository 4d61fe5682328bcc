//! PostgreSQL-backed store using sqlx.

use super::{ProductFilter, ProductStore};
use crate::error::AppError;
use crate::model::Product;
use crate::sql;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn insert(&self, product: &Product) -> Result<i64, AppError> {
        let q = sql::insert();
        tracing::debug!(sql = %q, "query");
        let id: i64 = sqlx::query_scalar(&q)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.available)
            .bind(product.category)
            .fetch_one(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update(&self, id: i64, product: &Product) -> Result<(), AppError> {
        let q = sql::update();
        tracing::debug!(sql = %q, id, "query");
        let result = sqlx::query(&q)
            .bind(id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.available)
            .bind(product.category)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("product {}", id)));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let q = sql::delete();
        tracing::debug!(sql = %q, id, "query");
        let result = sqlx::query(&q).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("product {}", id)));
        }
        Ok(())
    }

    async fn fetch_one(&self, id: i64) -> Result<Option<Product>, AppError> {
        let q = sql::select_by_id();
        tracing::debug!(sql = %q, id, "query");
        let row = sqlx::query_as::<_, Product>(&q)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn fetch_many(&self, filter: &ProductFilter) -> Result<Vec<Product>, AppError> {
        let q = sql::select_list(filter);
        tracing::debug!(sql = %q, filter = ?filter, "query");
        let query = sqlx::query_as::<_, Product>(&q);
        let query = match filter {
            ProductFilter::All => query,
            ProductFilter::Name(name) => query.bind(name.clone()),
            ProductFilter::Category(category) => query.bind(*category),
            ProductFilter::Available(available) => query.bind(*available),
        };
        let rows = query.fetch_all(&self.pool).await?;
        Ok(rows)
    }
}
