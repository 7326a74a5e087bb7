//! Handlers for `/identifiers` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/identifiers` | Optional `?customerId=`; newest first |
//! | `POST`   | `/identifiers` | Body: [`CreateBody`]; 201, 400, 404 or 409 |
//! | `GET`    | `/identifiers/{id}` | 404 if not found |
//! | `DELETE` | `/identifiers/{id}` | 204, or 404 if not found |

use std::sync::Arc;

use axum::{
  Json,
  extract::State,
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use vanduo_core::{
  identifier::{Identifier, NewIdentifier, Registration},
  store::AccountStore,
};

use crate::{
  error::ApiError,
  extract::{JsonBody, PathParam, QueryParams},
};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
  pub customer_id: Option<i64>,
}

/// `GET /identifiers[?customerId=<id>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  QueryParams(params): QueryParams<ListParams>,
) -> Result<Json<Vec<Identifier>>, ApiError>
where
  S: AccountStore,
{
  let identifiers = store
    .list_identifiers(params.customer_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(identifiers))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /identifiers`. Missing fields are reported as
/// validation errors rather than deserialisation failures; a body that is not
/// JSON of this shape at all is a 400 from [`JsonBody`].
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBody {
  #[serde(default)]
  pub customer_id:     i64,
  #[serde(default, rename = "type")]
  pub identifier_type: String,
  #[serde(default)]
  pub value:           String,
}

/// `POST /identifiers` — returns 201 + the stored [`Identifier`].
pub async fn create<S>(
  State(store): State<Arc<S>>,
  JsonBody(body): JsonBody<CreateBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: AccountStore,
{
  let input = NewIdentifier::from_request(
    body.customer_id,
    &body.identifier_type,
    &body.value,
  )?;

  match store
    .register(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    Registration::Created(identifier) => {
      Ok((StatusCode::CREATED, Json(identifier)))
    }
    Registration::Conflict { identifier_type, value } => {
      Err(ApiError::Conflict { identifier_type, value })
    }
    Registration::UnknownCustomer(id) => Err(ApiError::CustomerNotFound(id)),
  }
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /identifiers/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  PathParam(id): PathParam<i64>,
) -> Result<Json<Identifier>, ApiError>
where
  S: AccountStore,
{
  let identifier = store
    .get_identifier(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("identifier {id} not found")))?;
  Ok(Json(identifier))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /identifiers/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  PathParam(id): PathParam<i64>,
) -> Result<StatusCode, ApiError>
where
  S: AccountStore,
{
  let deleted = store
    .delete_identifier(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  if deleted {
    Ok(StatusCode::NO_CONTENT)
  } else {
    Err(ApiError::NotFound(format!("identifier {id} not found")))
  }
}
