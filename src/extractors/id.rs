//! Extract the `:id` path segment as raw text, leaving its checks to the route's rules.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::convert::Infallible;

/// The raw `:id` segment. `None` when it cannot be decoded (e.g. invalid UTF-8),
/// which the id rule then reports like any other non-integer id.
#[derive(Clone, Debug)]
pub struct RawId(pub Option<String>);

impl RawId {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RawId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(RawId(Some(raw))),
            Err(e) => {
                tracing::debug!(error = %e, "undecodable id segment");
                Ok(RawId(None))
            }
        }
    }
}
