//! Product store: a REST service over a single PostgreSQL-backed `Product` table.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod schema;
pub mod sql;
pub mod state;
pub mod store;

pub use config::ServiceConfig;
pub use error::{AppError, ConfigError, ValidationError};
pub use model::{Category, Product};
pub use routes::{app, common_routes, product_routes};
pub use schema::{db_create, ensure_database_exists, init_db};
pub use state::AppState;
pub use store::{InMemoryProductStore, PgProductStore, ProductFilter, ProductStore};
