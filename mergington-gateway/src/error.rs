//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mergington_core::{ErrorKind, RegistryError};
use serde_json::json;

/// Errors that can occur during gateway request handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// A signup or withdrawal was rejected by the registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The request is structurally malformed, e.g. the `email` query is missing.
    #[error("{0}")]
    InvalidRequest(String),
}

impl GatewayError {
    /// HTTP status reported for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Registry(e) => match e.kind() {
                ErrorKind::NotFound => StatusCode::NOT_FOUND,
                ErrorKind::Conflict => StatusCode::BAD_REQUEST,
            },
            GatewayError::InvalidRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
