//! Store traits implemented by storage backends (e.g. `vanduo-store-sqlite`).
//!
//! [`IdentifierIndex`] is the narrow lookup surface the resolver depends on.
//! [`AccountStore`] extends it with the customer and identifier management
//! operations used by the HTTP layer.

use std::future::Future;

use crate::{
  customer::{Customer, CustomerLookup, NewCustomer},
  identifier::{Identifier, IdentifierType, NewIdentifier, Registration},
};

// ─── Identifier index ────────────────────────────────────────────────────────

/// Mapping from `(type, canonical value)` to the owning customer.
///
/// The pair is unique, so a lookup yields at most one customer. Uniqueness and
/// the customer reference are enforced by the backend itself; concurrent
/// registrations of the same pair must resolve to exactly one `Created`.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait IdentifierIndex: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Exact match on the stored canonical value for `identifier_type`.
  fn find_owner<'a>(
    &'a self,
    identifier_type: IdentifierType,
    value: &'a str,
  ) -> impl Future<Output = Result<Option<Customer>, Self::Error>> + Send + 'a;

  /// Attach a new identifier to a customer.
  ///
  /// Duplicate pairs yield [`Registration::Conflict`] and unknown customers
  /// [`Registration::UnknownCustomer`]; neither touches existing rows.
  fn register(
    &self,
    input: NewIdentifier,
  ) -> impl Future<Output = Result<Registration, Self::Error>> + Send + '_;
}

// ─── Account store ───────────────────────────────────────────────────────────

pub trait AccountStore: IdentifierIndex {
  // ── Customers ─────────────────────────────────────────────────────────

  fn add_customer(
    &self,
    input: NewCustomer,
  ) -> impl Future<Output = Result<Customer, Self::Error>> + Send + '_;

  /// Returns `None` if not found.
  fn get_customer(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Customer>, Self::Error>> + Send + '_;

  /// All customers matching `lookup` exactly, ordered by id.
  fn find_customers(
    &self,
    lookup: CustomerLookup,
  ) -> impl Future<Output = Result<Vec<Customer>, Self::Error>> + Send + '_;

  // ── Identifiers ───────────────────────────────────────────────────────

  fn get_identifier(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Identifier>, Self::Error>> + Send + '_;

  /// Newest first; restricted to one customer when `customer_id` is set.
  fn list_identifiers(
    &self,
    customer_id: Option<i64>,
  ) -> impl Future<Output = Result<Vec<Identifier>, Self::Error>> + Send + '_;

  /// Returns `false` if no identifier had this id.
  fn delete_identifier(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
