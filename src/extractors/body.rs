//! Extract a request body as a JSON object. An empty body, or one not sent as
//! JSON, reads as `{}`.

use crate::error::AppError;
use crate::validation::{Violation, INVALID_BODY};
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default)]
pub struct JsonBody(pub Map<String, Value>);

fn invalid_body() -> AppError {
    AppError::Validation(vec![Violation::body("body", None, INVALID_BODY)])
}

/// `application/json`, with or without parameters, or any `+json` type.
fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json(req.headers()) {
            return Ok(JsonBody::default());
        }
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "unreadable request body");
            invalid_body()
        })?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(JsonBody::default());
        }
        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(JsonBody(map)),
            Ok(_) => Err(invalid_body()),
            Err(e) => {
                tracing::debug!(error = %e, "malformed json body");
                Err(invalid_body())
            }
        }
    }
}
