//! The product entity and the values handlers build from validated bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored product as seen by clients. Bookkeeping timestamps never leave storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub availability: bool,
}

impl Product {
    /// Full replace: every mutable field overwritten, id kept.
    pub fn replaced(&self, changes: ProductChanges) -> Product {
        Product {
            id: self.id,
            name: changes.name,
            price: changes.price,
            availability: changes.availability,
        }
    }

    /// Partial update: only availability flips.
    pub fn with_availability_toggled(&self) -> Product {
        Product {
            availability: !self.availability,
            ..self.clone()
        }
    }
}

/// Body of a create request. New products start available.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NewProduct {
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 300)]
    pub price: f64,
}

/// Body of a full replace request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductChanges {
    #[schema(example = "Monitor Curvo de 49 Pulgadas")]
    pub name: String,
    #[schema(example = 399)]
    pub price: f64,
    #[schema(example = true)]
    pub availability: bool,
}
