//! Product store server and administrative commands.

use clap::{Parser, Subcommand};
use product_store::{
    app, db_create, ensure_database_exists, init_db, AppState, PgProductStore, ServiceConfig,
};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "product-store", version, about = "Product catalog REST service")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Drop and recreate the products table. Destroys all rows.
    DbCreate,
    /// Create the products table if it does not exist.
    DbInit,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("product_store=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = ServiceConfig::from_env()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&config).await,
        Command::DbCreate => {
            let pool = connect(&config).await?;
            if let Err(e) = db_create(&pool).await {
                tracing::error!(error = %e, "error recreating database");
                return Err(e.into());
            }
            tracing::info!("Database recreated successfully.");
            Ok(())
        }
        Command::DbInit => {
            let pool = connect(&config).await?;
            if let Err(e) = init_db(&pool).await {
                tracing::error!(error = %e, "error initializing database");
                return Err(e.into());
            }
            tracing::info!("Database initialized successfully.");
            Ok(())
        }
    }
}

async fn connect(config: &ServiceConfig) -> Result<PgPool, Box<dyn std::error::Error>> {
    ensure_database_exists(&config.database_uri).await?;
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_uri)
        .await?;
    Ok(pool)
}

async fn serve(config: &ServiceConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Service initializing");
    let pool = connect(config).await?;
    init_db(&pool).await?;
    let state = AppState::new(PgProductStore::new(pool), config.static_dir.clone());

    let listener = TcpListener::bind(config.listen_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
