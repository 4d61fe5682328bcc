//! The `Product` record: JSON mapping, persistence methods and finders.
//!
//! Persistence always goes through an explicitly passed [`ProductStore`]; nothing here holds a
//! connection of its own.

use super::category::Category;
use super::validation::ProductPatch;
use crate::error::{AppError, ValidationError};
use crate::store::{ProductFilter, ProductStore};
use rust_decimal::Decimal;
use serde_json::{json, Number, Value};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    /// `None` until the first successful [`Product::create`].
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub available: bool,
    pub category: Category,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        available: bool,
        category: Category,
    ) -> Self {
        Product {
            id: None,
            name: name.into(),
            description: description.into(),
            price,
            available,
            category,
        }
    }

    /// `{id, name, description, price, available, category}` with price as an exact JSON number.
    pub fn serialize(&self) -> Value {
        json!({
            "id": self.id,
            "name": self.name,
            "description": self.description,
            "price": price_to_json(self.price),
            "available": self.available,
            "category": self.category.as_str(),
        })
    }

    /// Build a new, unsaved product. `name` and `price` are required; the rest default to an empty
    /// description, available, and `UNKNOWN`.
    pub fn deserialize(data: &Value) -> Result<Product, ValidationError> {
        let patch = ProductPatch::from_json(data)?;
        Ok(Product {
            id: None,
            name: patch.name.ok_or(ValidationError::MissingField("name"))?,
            description: patch.description.unwrap_or_default(),
            price: patch.price.ok_or(ValidationError::MissingField("price"))?,
            available: patch.available.unwrap_or(true),
            category: patch.category.unwrap_or_default(),
        })
    }

    /// Overwrite the fields present in `data`. Nothing changes if any field is invalid.
    pub fn deserialize_into(&mut self, data: &Value) -> Result<(), ValidationError> {
        let patch = ProductPatch::from_json(data)?;
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        Ok(())
    }

    /// Insert as a new row and take the generated id.
    pub async fn create(&mut self, store: &dyn ProductStore) -> Result<i64, AppError> {
        if let Some(id) = self.id {
            return Err(AppError::AlreadyPersisted(id));
        }
        tracing::info!(name = %self.name, "creating product");
        let id = store.insert(self).await?;
        self.id = Some(id);
        Ok(id)
    }

    pub async fn update(&self, store: &dyn ProductStore) -> Result<(), AppError> {
        let id = self.id.ok_or(AppError::MissingId)?;
        tracing::info!(id, name = %self.name, "updating product");
        store.update(id, self).await
    }

    pub async fn delete(&self, store: &dyn ProductStore) -> Result<(), AppError> {
        let id = self.id.ok_or(AppError::MissingId)?;
        tracing::info!(id, name = %self.name, "deleting product");
        store.delete(id).await
    }

    pub async fn all(store: &dyn ProductStore) -> Result<Vec<Product>, AppError> {
        store.fetch_many(&ProductFilter::All).await
    }

    pub async fn find(store: &dyn ProductStore, id: i64) -> Result<Option<Product>, AppError> {
        store.fetch_one(id).await
    }

    pub async fn find_by_name(
        store: &dyn ProductStore,
        name: &str,
    ) -> Result<Vec<Product>, AppError> {
        store.fetch_many(&ProductFilter::Name(name.to_string())).await
    }

    pub async fn find_by_category(
        store: &dyn ProductStore,
        category: Category,
    ) -> Result<Vec<Product>, AppError> {
        store.fetch_many(&ProductFilter::Category(category)).await
    }

    pub async fn find_by_availability(
        store: &dyn ProductStore,
        available: bool,
    ) -> Result<Vec<Product>, AppError> {
        store.fetch_many(&ProductFilter::Available(available)).await
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "<Product {} id=[{}]>", self.name, id),
            None => write!(f, "<Product {} id=[None]>", self.name),
        }
    }
}

fn price_to_json(price: Decimal) -> Value {
    let text = price.to_string();
    match Number::from_str(&text) {
        Ok(n) => Value::Number(n),
        Err(_) => Value::String(text),
    }
}
