//! JSON REST API for the Vanduo account store.
//!
//! Exposes an axum [`Router`] backed by any [`vanduo_core::store::AccountStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", vanduo_api::api_router(store.clone()))
//! ```

pub mod customers;
pub mod error;
pub mod extract;
pub mod identifiers;
pub mod resolve;

use std::sync::Arc;

use axum::{Router, routing::get};
use vanduo_core::store::AccountStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: AccountStore + 'static,
{
  Router::new()
    // Resolution
    .route("/resolve", get(resolve::empty))
    .route("/resolve/", get(resolve::empty))
    .route("/resolve/{raw}", get(resolve::handler::<S>))
    // Identifiers
    .route(
      "/identifiers",
      get(identifiers::list::<S>).post(identifiers::create::<S>),
    )
    .route(
      "/identifiers/{id}",
      get(identifiers::get_one::<S>).delete(identifiers::delete_one::<S>),
    )
    // Customers
    .route("/customers/{id}", get(customers::get_one::<S>))
    .route(
      "/customers/by-personal-code/{code}",
      get(customers::by_personal_code::<S>),
    )
    .route("/customers/by-email/{email}", get(customers::by_email::<S>))
    .route("/customers/by-surname/{surname}", get(customers::by_surname::<S>))
    .route("/customers/by-phone/{phone}", get(customers::by_phone::<S>))
    .with_state(store)
}
