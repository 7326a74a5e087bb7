//! Customer — the account holder every identifier points at.
//!
//! Customers are created by the account-registration flow and only read by
//! the identifier pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
  pub id:            i64,
  pub name:          String,
  pub surname:       String,
  pub personal_code: String,
  pub email:         String,
  pub phone:         Option<String>,
  pub created_at:    DateTime<Utc>,
}

/// Input to [`crate::store::AccountStore::add_customer`].
/// `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewCustomer {
  pub name:          String,
  pub surname:       String,
  pub personal_code: String,
  pub email:         String,
  pub phone:         Option<String>,
}

/// Exact-match lookups over customer attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerLookup {
  PersonalCode(String),
  Email(String),
  Surname(String),
  Phone(String),
}
