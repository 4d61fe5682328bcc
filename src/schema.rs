//! Administrative DDL for the products table. Never runs during request handling.

use crate::error::AppError;
use crate::model::{Category, DESCRIPTION_MAX_LEN, NAME_MAX_LEN};
use crate::sql::{quoted, CATEGORY_TYPE, PRODUCTS_TABLE};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// `CREATE TYPE` for the category enum, values in declaration order.
pub fn create_category_type_sql() -> String {
    let values: Vec<String> = Category::ALL
        .iter()
        .map(|c| format!("'{}'", c.as_str()))
        .collect();
    format!("CREATE TYPE {} AS ENUM ({})", quoted(CATEGORY_TYPE), values.join(", "))
}

pub fn create_table_sql() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            "id" BIGSERIAL PRIMARY KEY,
            "name" VARCHAR({name_len}) NOT NULL,
            "description" VARCHAR({desc_len}) NOT NULL DEFAULT '',
            "price" NUMERIC NOT NULL,
            "available" BOOLEAN NOT NULL DEFAULT TRUE,
            "category" {category} NOT NULL DEFAULT '{default}'
        )
        "#,
        table = quoted(PRODUCTS_TABLE),
        name_len = NAME_MAX_LEN,
        desc_len = DESCRIPTION_MAX_LEN,
        category = quoted(CATEGORY_TYPE),
        default = Category::default().as_str(),
    )
}

/// Create the category type and products table when missing. Existing rows are kept.
pub async fn init_db(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    let type_exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_type WHERE typname = $1)")
        .bind(CATEGORY_TYPE)
        .fetch_one(&mut *tx)
        .await?;
    if !type_exists.0 {
        sqlx::query(&create_category_type_sql()).execute(&mut *tx).await?;
    }
    sqlx::query(&create_table_sql()).execute(&mut *tx).await?;
    tx.commit().await?;
    tracing::info!(table = PRODUCTS_TABLE, "database initialized");
    Ok(())
}

/// Drop and recreate the products table and category type. Destroys all rows.
pub async fn db_create(pool: &PgPool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    sqlx::query(&format!("DROP TABLE IF EXISTS {}", quoted(PRODUCTS_TABLE)))
        .execute(&mut *tx)
        .await?;
    sqlx::query(&format!("DROP TYPE IF EXISTS {}", quoted(CATEGORY_TYPE)))
        .execute(&mut *tx)
        .await?;
    sqlx::query(&create_category_type_sql()).execute(&mut *tx).await?;
    sqlx::query(&create_table_sql()).execute(&mut *tx).await?;
    tx.commit().await?;
    tracing::info!(table = PRODUCTS_TABLE, "database recreated");
    Ok(())
}

/// Create the target database if it does not exist, connecting through the `postgres` maintenance
/// database on the same server.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid database url: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "database created");
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| AppError::BadRequest("database url: no path".into()))?;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let (db_name, query) = match path_and_query.split_once('?') {
        Some((name, query)) => (name.trim(), Some(query)),
        None => (path_and_query.trim(), None),
    };
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = match query {
        Some(q) => format!("{}postgres?{}", base, q),
        None => format!("{}postgres", base),
    };
    Ok((admin_url, db_name.to_string()))
}
