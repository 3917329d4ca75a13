//! Products API: validated CRUD over a single products table.

pub mod docs;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod server;
pub mod settings;
pub mod state;
pub mod store;
pub mod validation;

pub use docs::{docs_routes, ApiDoc};
pub use error::{AppError, ConfigError};
pub use migration::{clear_products, ensure_products_table};
pub use model::{NewProduct, Product, ProductChanges};
pub use response::{success_many, success_one, success_one_ok};
pub use routes::{api_routes, common_routes, product_routes};
pub use server::{build_app, cors_layer, serve};
pub use settings::Settings;
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryProductStore, PgProductStore, ProductStore};
pub use validation::{RequestValidator, Violation};
