//! Product handlers: list, read, create, replace, toggle availability, delete.
//!
//! Each handler runs its route's rules first, then resolves the product by id
//! (except list and create) before touching storage.

use crate::docs::{DeletedResponse, ProductListResponse, ProductResponse};
use crate::error::{AppError, ErrorBody, ViolationsBody};
use crate::extractors::{JsonBody, RawId};
use crate::model::{NewProduct, ProductChanges};
use crate::response::{success_many, success_one, success_one_ok};
use crate::state::AppState;
use crate::validation::{RequestInput, RequestValidator, CREATE_RULES, ID_RULES, REPLACE_RULES};
use axum::{extract::State, response::IntoResponse};

pub const DELETED_MESSAGE: &str = "Producto eliminado";

fn path_id(raw: &RawId) -> Result<i64, AppError> {
    RequestValidator::accept(ID_RULES, &RequestInput::new(raw.as_deref(), None), RequestInput::id)
}

/// List every product, newest first.
#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Products",
    responses(
        (status = 200, description = "All products", body = ProductListResponse),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = state.store.list().await?;
    Ok(success_many(rows))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ViolationsBody),
        (status = 404, description = "No product with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn read(State(state): State<AppState>, raw_id: RawId) -> Result<impl IntoResponse, AppError> {
    let id = path_id(&raw_id)?;
    let product = state.store.get(id).await?.ok_or(AppError::NotFound)?;
    Ok(success_one_ok(product))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Products",
    request_body = NewProduct,
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Invalid body", body = ViolationsBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> Result<impl IntoResponse, AppError> {
    let product = RequestValidator::accept(CREATE_RULES, &RequestInput::new(None, Some(&body)), |input| {
        Some(NewProduct { name: input.name(), price: input.price()? })
    })?;
    let created = state.store.insert(product).await?;
    tracing::info!(id = created.id, "product created");
    Ok(success_one(created))
}

/// Full replace: name, price and availability are all required.
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    request_body = ProductChanges,
    responses(
        (status = 200, description = "Product replaced", body = ProductResponse),
        (status = 400, description = "Invalid id or body", body = ViolationsBody),
        (status = 404, description = "No product with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn replace(
    State(state): State<AppState>,
    raw_id: RawId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input = RequestInput::new(raw_id.as_deref(), Some(&body));
    let (id, changes) = RequestValidator::accept(REPLACE_RULES, &input, |input| {
        let changes = ProductChanges {
            name: input.name(),
            price: input.price()?,
            availability: input.availability()?,
        };
        Some((input.id()?, changes))
    })?;
    let current = state.store.get(id).await?.ok_or(AppError::NotFound)?;
    let updated = state
        .store
        .save(&current.replaced(changes))
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(success_one_ok(updated))
}

/// Flip availability; name and price stay as they are.
#[utoipa::path(
    patch,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Availability flipped", body = ProductResponse),
        (status = 400, description = "Invalid id", body = ViolationsBody),
        (status = 404, description = "No product with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn toggle_availability(
    State(state): State<AppState>,
    raw_id: RawId,
) -> Result<impl IntoResponse, AppError> {
    let id = path_id(&raw_id)?;
    let current = state.store.get(id).await?.ok_or(AppError::NotFound)?;
    let updated = state
        .store
        .save(&current.with_availability_toggled())
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(success_one_ok(updated))
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "Products",
    params(("id" = i64, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product deleted", body = DeletedResponse),
        (status = 400, description = "Invalid id", body = ViolationsBody),
        (status = 404, description = "No product with this id", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
pub async fn delete(State(state): State<AppState>, raw_id: RawId) -> Result<impl IntoResponse, AppError> {
    let id = path_id(&raw_id)?;
    state.store.get(id).await?.ok_or(AppError::NotFound)?;
    if !state.store.remove(id).await? {
        return Err(AppError::NotFound);
    }
    tracing::info!(id, "product deleted");
    Ok(success_one_ok(DELETED_MESSAGE))
}
