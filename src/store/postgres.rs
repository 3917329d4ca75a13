//! PostgreSQL product store and database bootstrap.

use super::ProductStore;
use crate::error::{AppError, ConfigError};
use crate::migration::PRODUCTS_TABLE;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

const COLUMNS: &str = "id, name, price, availability";

#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        PgProductStore { pool }
    }
}

#[async_trait]
impl ProductStore for PgProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id DESC", COLUMNS, PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Product>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", COLUMNS, PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, AppError> {
        let sql = format!(
            "INSERT INTO {} (name, price) VALUES ($1, $2) RETURNING {}",
            PRODUCTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(&product.name)
            .bind(product.price)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, product: &Product) -> Result<Option<Product>, AppError> {
        let sql = format!(
            "UPDATE {} SET name = $2, price = $3, availability = $4, updated_at = NOW() WHERE id = $1 RETURNING {}",
            PRODUCTS_TABLE, COLUMNS
        );
        tracing::debug!(sql = %sql, id = product.id, "query");
        let row = sqlx::query_as::<_, Product>(&sql)
            .bind(product.id)
            .bind(&product.name)
            .bind(product.price)
            .bind(product.availability)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn remove(&self, id: i64) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", PRODUCTS_TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_database_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Split a connection URL into (url of the `postgres` admin database, target database name).
fn split_database_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url.find("://").map(|i| i + 3).unwrap_or(0);
    let path_start = url[scheme_end..]
        .find('/')
        .map(|i| scheme_end + i + 1)
        .ok_or_else(|| ConfigError::Invalid {
            key: "DATABASE_URL",
            value: url.to_string(),
        })?;
    let rest = &url[path_start..];
    let (db_name, query) = match rest.split_once('?') {
        Some((name, q)) => (name.trim(), Some(q)),
        None => (rest.trim(), None),
    };
    let mut admin_url = format!("{}postgres", &url[..path_start]);
    if let Some(q) = query {
        admin_url.push('?');
        admin_url.push_str(q);
    }
    Ok((admin_url, db_name.to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
