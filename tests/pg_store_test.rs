//! PostgreSQL store tests. They run against `DATABASE_URI` (or `DATABASE_URL`) and are skipped
//! when neither is set. Every test recreates the table, so they are serialized.

use product_store::{db_create, init_db, Category, PgProductStore, Product, ProductStore};
use rust_decimal::Decimal;
use sqlx::postgres::PgPoolOptions;
use tokio::sync::{Mutex, MutexGuard};

static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn fresh_store() -> Option<(PgProductStore, MutexGuard<'static, ()>)> {
    let url = std::env::var("DATABASE_URI")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()?;
    let guard = DB_LOCK.lock().await;
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("connect to test database");
    db_create(&pool).await.expect("recreate products table");
    Some((PgProductStore::new(pool), guard))
}

fn fedora() -> Product {
    Product::new("Fedora", "A red hat", Decimal::new(1250, 2), true, Category::Cloths)
}

#[tokio::test]
async fn create_assigns_id_and_persists_fields() {
    let Some((store, _guard)) = fresh_store().await else {
        return;
    };
    assert!(Product::all(&store).await.unwrap().is_empty());

    let mut product = fedora();
    let id = product.create(&store).await.unwrap();
    assert_eq!(product.id, Some(id));

    let all = Product::all(&store).await.unwrap();
    assert_eq!(all, vec![product.clone()]);
    assert_eq!(all[0].price.to_string(), "12.50");
}

#[tokio::test]
async fn update_overwrites_row() {
    let Some((store, _guard)) = fresh_store().await else {
        return;
    };
    let mut product = fedora();
    let id = product.create(&store).await.unwrap();

    product.name = "Updated Fedora".into();
    product.description = "An updated red hat".into();
    product.price = Decimal::new(1500, 2);
    product.available = false;
    product.category = Category::Electronics;
    product.update(&store).await.unwrap();

    let found = Product::find(&store, id).await.unwrap().unwrap();
    assert_eq!(found, product);
}

#[tokio::test]
async fn update_and_delete_of_missing_row_fail() {
    let Some((store, _guard)) = fresh_store().await else {
        return;
    };
    let mut ghost = fedora();
    ghost.id = Some(4242);
    assert!(ghost.update(&store).await.is_err());
    assert!(ghost.delete(&store).await.is_err());
    assert!(store.fetch_one(4242).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_removes_row() {
    let Some((store, _guard)) = fresh_store().await else {
        return;
    };
    let mut product = fedora();
    let id = product.create(&store).await.unwrap();
    product.delete(&store).await.unwrap();
    assert_eq!(Product::find(&store, id).await.unwrap(), None);
}

#[tokio::test]
async fn finders_match_exactly() {
    let Some((store, _guard)) = fresh_store().await else {
        return;
    };
    let mut rows = vec![
        fedora(),
        Product::new("Jeans", "Blue denim jeans", Decimal::new(3000, 2), false, Category::Cloths),
        Product::new("Shampoo", "Hair care shampoo", Decimal::new(500, 2), true, Category::Beauty),
    ];
    for p in rows.iter_mut() {
        p.create(&store).await.unwrap();
    }

    let cloths = Product::find_by_category(&store, Category::Cloths).await.unwrap();
    assert_eq!(cloths, rows[..2].to_vec());
    assert!(Product::find_by_category(&store, Category::Tools).await.unwrap().is_empty());

    let available = Product::find_by_availability(&store, true).await.unwrap();
    assert_eq!(available, vec![rows[0].clone(), rows[2].clone()]);

    let by_name = Product::find_by_name(&store, "Shampoo").await.unwrap();
    assert_eq!(by_name, vec![rows[2].clone()]);
    assert!(Product::find_by_name(&store, "NonExistentProduct").await.unwrap().is_empty());
}

#[tokio::test]
async fn init_db_keeps_existing_rows() {
    let Some((store, _guard)) = fresh_store().await else {
        return;
    };
    let mut product = fedora();
    product.create(&store).await.unwrap();
    init_db(store.pool()).await.unwrap();
    assert_eq!(Product::all(&store).await.unwrap().len(), 1);
}
