//! Handler for `GET /resolve/{raw}` — identifier resolution.
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | match | 200 | `{"matchedType", "customer"}` |
//! | blank input | 400 | `{"error": "Empty identifier"}` |
//! | unclassifiable | 400 | `{"error": "Unknown identifier format", "value"}` |
//! | no match | 404 | `{"matchedType", "value"}` |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use vanduo_core::{
  Error,
  resolver::{Resolution, ResolveError, resolve},
  store::IdentifierIndex,
};

use crate::{error::ApiError, extract::PathParam};

/// `GET /resolve/{raw}` — `raw` is the URL-decoded path segment.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  PathParam(raw): PathParam<String>,
) -> Result<Response, ApiError>
where
  S: IdentifierIndex,
{
  let resolution = resolve(store.as_ref(), &raw).await.map_err(|e| match e {
    ResolveError::Invalid(e) => ApiError::Invalid(e),
    ResolveError::Index(e) => ApiError::Store(Box::new(e)),
  })?;

  let response = match resolution {
    Resolution::Matched(found) => {
      tracing::debug!(
        matched_type = %found.matched_type,
        customer_id = found.customer.id,
        "identifier resolved"
      );
      Json(found).into_response()
    }
    Resolution::Unclassified { value } => {
      tracing::debug!(%value, "identifier format not recognised");
      (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": "Unknown identifier format", "value": value })),
      )
        .into_response()
    }
    Resolution::NoMatch { matched_type, value } => {
      tracing::debug!(%matched_type, %value, "no customer for identifier");
      (
        StatusCode::NOT_FOUND,
        Json(json!({ "matchedType": matched_type, "value": value })),
      )
        .into_response()
    }
  };
  Ok(response)
}

/// `GET /resolve` with no path segment at all.
pub async fn empty() -> ApiError { ApiError::Invalid(Error::EmptyIdentifier) }
