//! Persistence collaborator for products.

mod memory;
mod postgres;
pub use memory::MemoryProductStore;
pub use postgres::{ensure_database_exists, PgProductStore};

use crate::error::AppError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, highest id first.
    async fn list(&self) -> Result<Vec<Product>, AppError>;

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Insert with a fresh id and `availability = true`.
    async fn insert(&self, product: NewProduct) -> Result<Product, AppError>;

    /// Write every mutable field of `product` in one statement. `None` when the row is gone.
    async fn save(&self, product: &Product) -> Result<Option<Product>, AppError>;

    /// Returns whether a row was removed.
    async fn remove(&self, id: i64) -> Result<bool, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}
