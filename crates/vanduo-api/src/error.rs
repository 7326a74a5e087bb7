//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use vanduo_core::identifier::IdentifierType;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("invalid input: {0}")]
  Invalid(#[from] vanduo_core::Error),

  #[error("customer {0} not found")]
  CustomerNotFound(i64),

  #[error("{identifier_type} {value:?} is already registered")]
  Conflict {
    identifier_type: IdentifierType,
    value:           String,
  },

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, body) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, json!({ "error": m })),
      ApiError::BadRequest(m) => {
        (StatusCode::BAD_REQUEST, json!({ "error": m }))
      }
      ApiError::Invalid(e) => {
        (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
      }
      ApiError::CustomerNotFound(id) => (
        StatusCode::NOT_FOUND,
        json!({ "error": "Customer not found", "customerId": id }),
      ),
      ApiError::Conflict { identifier_type, value } => (
        StatusCode::CONFLICT,
        json!({
          "error": "Identifier already registered",
          "type": identifier_type,
          "value": value,
        }),
      ),
      ApiError::Store(e) => {
        tracing::warn!(error = %e, "store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, json!({ "error": e.to_string() }))
      }
    };
    (status, Json(body)).into_response()
  }
}
