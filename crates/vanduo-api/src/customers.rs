//! Read-only handlers for `/customers` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/customers/{id}` | 404 if not found |
//! | `GET`  | `/customers/by-personal-code/{code}` | First match, 404 if none |
//! | `GET`  | `/customers/by-email/{email}` | First match, 404 if none |
//! | `GET`  | `/customers/by-surname/{surname}` | All matches, 404 if none |
//! | `GET`  | `/customers/by-phone/{phone}` | All matches, 404 if none |

use std::sync::Arc;

use axum::{Json, extract::State};
use vanduo_core::{
  customer::{Customer, CustomerLookup},
  store::AccountStore,
};

use crate::{error::ApiError, extract::PathParam};

async fn lookup<S>(
  store: &S,
  lookup: CustomerLookup,
) -> Result<Vec<Customer>, ApiError>
where
  S: AccountStore,
{
  let customers = store
    .find_customers(lookup)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if customers.is_empty() {
    return Err(ApiError::NotFound("no matching customer".into()));
  }
  Ok(customers)
}

async fn first<S>(
  store: &S,
  by: CustomerLookup,
) -> Result<Json<Customer>, ApiError>
where
  S: AccountStore,
{
  let mut customers = lookup(store, by).await?;
  Ok(Json(customers.swap_remove(0)))
}

/// `GET /customers/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  PathParam(id): PathParam<i64>,
) -> Result<Json<Customer>, ApiError>
where
  S: AccountStore,
{
  let customer = store
    .get_customer(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("customer {id} not found")))?;
  Ok(Json(customer))
}

/// `GET /customers/by-personal-code/{code}`
pub async fn by_personal_code<S>(
  State(store): State<Arc<S>>,
  PathParam(code): PathParam<String>,
) -> Result<Json<Customer>, ApiError>
where
  S: AccountStore,
{
  first(store.as_ref(), CustomerLookup::PersonalCode(code)).await
}

/// `GET /customers/by-email/{email}`
pub async fn by_email<S>(
  State(store): State<Arc<S>>,
  PathParam(email): PathParam<String>,
) -> Result<Json<Customer>, ApiError>
where
  S: AccountStore,
{
  first(store.as_ref(), CustomerLookup::Email(email)).await
}

/// `GET /customers/by-surname/{surname}`
pub async fn by_surname<S>(
  State(store): State<Arc<S>>,
  PathParam(surname): PathParam<String>,
) -> Result<Json<Vec<Customer>>, ApiError>
where
  S: AccountStore,
{
  lookup(store.as_ref(), CustomerLookup::Surname(surname))
    .await
    .map(Json)
}

/// `GET /customers/by-phone/{phone}`
pub async fn by_phone<S>(
  State(store): State<Arc<S>>,
  PathParam(phone): PathParam<String>,
) -> Result<Json<Vec<Customer>>, ApiError>
where
  S: AccountStore,
{
  lookup(store.as_ref(), CustomerLookup::Phone(phone))
    .await
    .map(Json)
}
