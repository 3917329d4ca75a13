//! Products table DDL. Idempotent; runs on every startup.

use crate::error::AppError;
use sqlx::PgPool;

pub const PRODUCTS_TABLE: &str = "products";

pub async fn ensure_products_table(pool: &PgPool) -> Result<(), AppError> {
    let ddl = format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL CHECK (btrim(name) <> ''),
            price DOUBLE PRECISION NOT NULL CHECK (price > 0),
            availability BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        PRODUCTS_TABLE
    );
    sqlx::query(&ddl).execute(pool).await?;
    tracing::info!(table = PRODUCTS_TABLE, "table ensured");
    Ok(())
}

/// Remove every product. The id sequence keeps counting.
pub async fn clear_products(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&format!("TRUNCATE TABLE {}", PRODUCTS_TABLE))
        .execute(pool)
        .await?;
    Ok(())
}
