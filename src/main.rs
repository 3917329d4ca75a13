//! Products API server: loads settings, prepares PostgreSQL, serves the router.

use clap::Parser;
use products_api::{
    clear_products, ensure_database_exists, ensure_products_table, serve, AppState, MemoryProductStore,
    PgProductStore, Settings,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "products-api", version, about = "REST API for products")]
struct Cli {
    /// Delete every product and exit.
    #[arg(long)]
    clear: bool,
    /// Serve from an in-process store instead of PostgreSQL.
    #[arg(long, conflicts_with = "clear")]
    memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("products_api=info,tower_http=info")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    if cli.memory {
        tracing::warn!("serving from memory; data is lost on exit");
        let state = AppState::new(Arc::new(MemoryProductStore::new()));
        serve(state, &settings).await?;
        return Ok(());
    }

    ensure_database_exists(&settings.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    tracing::info!("connected to database");
    ensure_products_table(&pool).await?;

    if cli.clear {
        clear_products(&pool).await?;
        tracing::info!("products cleared");
        pool.close().await;
        return Ok(());
    }

    let state = AppState::new(Arc::new(PgProductStore::new(pool.clone())));
    serve(state, &settings).await?;
    pool.close().await;
    Ok(())
}
