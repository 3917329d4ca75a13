pub mod common;
pub mod product;

pub use common::{api_routes, common_routes};
pub use product::product_routes;
