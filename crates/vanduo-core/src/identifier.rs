//! Identifiers — alternate handles by which a customer can be located.
//!
//! An identifier is a `(type, canonical value)` pair owned by exactly one
//! customer. The pair is unique across the whole index. Identifiers are never
//! updated; a correction is a delete followed by a fresh registration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Error, Result, classify::classify, normalize::normalize};

// ─── Type ────────────────────────────────────────────────────────────────────

/// The closed set of identifier kinds.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
  strum::AsRefStr,
  strum::IntoStaticStr,
  strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum IdentifierType {
  /// National personal code, 11 digits.
  PersonalCode,
  /// Service contract number, e.g. `AB123456`.
  ContractNumber,
  /// Serviced object (premises) number, 7 to 9 digits.
  ObjectNumber,
}

impl IdentifierType {
  /// Parse a user-supplied type name. Surrounding whitespace and letter case
  /// are ignored.
  pub fn parse(raw: &str) -> Result<Self> {
    let name = raw.trim().to_lowercase();
    if name.is_empty() {
      return Err(Error::MissingField("type"));
    }
    name.parse().map_err(|_| Error::UnknownIdentifierType(name))
  }
}

// ─── Identifier ──────────────────────────────────────────────────────────────

/// A registered identifier row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
  pub id:              i64,
  pub customer_id:     i64,
  #[serde(rename = "type")]
  pub identifier_type: IdentifierType,
  /// Canonical (normalised) value.
  pub value:           String,
  pub created_at:      DateTime<Utc>,
}

// ─── NewIdentifier ───────────────────────────────────────────────────────────

/// Validated input to [`crate::store::IdentifierIndex::register`].
///
/// Can only be built through the constructors below, so the value is always
/// canonical and always has the shape of its declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIdentifier {
  customer_id:     i64,
  identifier_type: IdentifierType,
  value:           String,
}

impl NewIdentifier {
  pub fn new(
    customer_id: i64,
    identifier_type: IdentifierType,
    raw_value: &str,
  ) -> Result<Self> {
    if customer_id <= 0 {
      return Err(Error::InvalidCustomerId(customer_id));
    }
    if raw_value.trim().is_empty() {
      return Err(Error::MissingField("value"));
    }

    let value = normalize(raw_value);
    match classify(&value) {
      Ok(inferred) if inferred == identifier_type => Ok(Self {
        customer_id,
        identifier_type,
        value,
      }),
      _ => Err(Error::TypeMismatch { declared: identifier_type, value }),
    }
  }

  /// Build from loosely-typed request fields: the type arrives as a string.
  pub fn from_request(
    customer_id: i64,
    identifier_type: &str,
    raw_value: &str,
  ) -> Result<Self> {
    if customer_id <= 0 {
      return Err(Error::InvalidCustomerId(customer_id));
    }
    let identifier_type = IdentifierType::parse(identifier_type)?;
    Self::new(customer_id, identifier_type, raw_value)
  }

  pub fn customer_id(&self) -> i64 { self.customer_id }

  pub fn identifier_type(&self) -> IdentifierType { self.identifier_type }

  pub fn value(&self) -> &str { &self.value }
}

// ─── Registration outcome ────────────────────────────────────────────────────

/// Domain outcome of a registration attempt. Storage failures are reported
/// separately through the store's error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Registration {
  Created(Identifier),
  /// The `(type, value)` pair already belongs to some customer.
  Conflict {
    identifier_type: IdentifierType,
    value:           String,
  },
  /// The customer id does not reference an existing customer.
  UnknownCustomer(i64),
}
