//! In-process product store. Backs `--memory` runs and the test suite.

use super::ProductStore;
use crate::error::AppError;
use crate::model::{NewProduct, Product};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryProductStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i64, Product>,
    last_id: i64,
}

impl MemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().rev().cloned().collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Product>, AppError> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, product: NewProduct) -> Result<Product, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let row = Product {
            id: inner.last_id,
            name: product.name,
            price: product.price,
            availability: true,
        };
        inner.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn save(&self, product: &Product) -> Result<Option<Product>, AppError> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&product.id) {
            Some(row) => {
                *row = product.clone();
                Ok(Some(row.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
