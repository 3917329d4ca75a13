//! Product CRUD routes, mounted under `/api/products`.

use crate::handlers::product::{create, delete as delete_handler, list, read, replace, toggle_availability};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn product_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list).post(create))
        .route(
            "/:id",
            get(read)
                .put(replace)
                .patch(toggle_availability)
                .delete(delete_handler),
        )
        .with_state(state)
}
