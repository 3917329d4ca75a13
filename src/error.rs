//! Typed errors and HTTP mapping.

use crate::validation::Violation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub const NOT_FOUND_MESSAGE: &str = "Producto no encontrado";
pub const DATABASE_ERROR_MESSAGE: &str = "Database error";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed with {} violation(s)", .0.len())]
    Validation(Vec<Violation>),
    #[error("product not found")]
    NotFound,
    #[error("database: {0}")]
    Db(#[from] sqlx::Error),
    #[error("store: {0}")]
    Store(String),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(value_type = String, example = "Producto no encontrado")]
    pub error: &'static str,
}

#[derive(Serialize, ToSchema)]
pub struct ViolationsBody {
    pub errors: Vec<Violation>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(ViolationsBody { errors })).into_response()
            }
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody { error: NOT_FOUND_MESSAGE }),
            )
                .into_response(),
            AppError::Db(_) | AppError::Store(_) => {
                tracing::error!(error = %self, "storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error: DATABASE_ERROR_MESSAGE }),
                )
                    .into_response()
            }
            AppError::Config(_) => {
                tracing::error!(error = %self, "configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody { error: DATABASE_ERROR_MESSAGE }),
                )
                    .into_response()
            }
        }
    }
}
