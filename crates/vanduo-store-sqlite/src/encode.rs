//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Timestamps are stored as RFC 3339 strings; identifier types as their
//! snake_case names.

use chrono::{DateTime, Utc};
use vanduo_core::{
  customer::Customer,
  identifier::{Identifier, IdentifierType},
};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── IdentifierType ──────────────────────────────────────────────────────────

pub fn encode_identifier_type(t: IdentifierType) -> &'static str { t.into() }

pub fn decode_identifier_type(s: &str) -> Result<IdentifierType> {
  s.parse().map_err(|_| {
    Error::Core(vanduo_core::Error::UnknownIdentifierType(s.to_owned()))
  })
}

// ─── Row types ───────────────────────────────────────────────────────────────

pub const CUSTOMER_COLUMNS: &str =
  "id, name, surname, personal_code, email, phone, created_at";

/// Raw values read directly from a `customers` row.
pub struct RawCustomer {
  pub id:            i64,
  pub name:          String,
  pub surname:       String,
  pub personal_code: String,
  pub email:         String,
  pub phone:         Option<String>,
  pub created_at:    String,
}

impl RawCustomer {
  /// Read a row selected with [`CUSTOMER_COLUMNS`], in that order.
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:            row.get(0)?,
      name:          row.get(1)?,
      surname:       row.get(2)?,
      personal_code: row.get(3)?,
      email:         row.get(4)?,
      phone:         row.get(5)?,
      created_at:    row.get(6)?,
    })
  }

  pub fn into_customer(self) -> Result<Customer> {
    Ok(Customer {
      id:            self.id,
      name:          self.name,
      surname:       self.surname,
      personal_code: self.personal_code,
      email:         self.email,
      phone:         self.phone,
      created_at:    decode_dt(&self.created_at)?,
    })
  }
}

pub const IDENTIFIER_COLUMNS: &str =
  "id, customer_id, identifier_type, value, created_at";

/// Raw values read directly from an `identifiers` row.
pub struct RawIdentifier {
  pub id:              i64,
  pub customer_id:     i64,
  pub identifier_type: String,
  pub value:           String,
  pub created_at:      String,
}

impl RawIdentifier {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      id:              row.get(0)?,
      customer_id:     row.get(1)?,
      identifier_type: row.get(2)?,
      value:           row.get(3)?,
      created_at:      row.get(4)?,
    })
  }

  pub fn into_identifier(self) -> Result<Identifier> {
    Ok(Identifier {
      id:              self.id,
      customer_id:     self.customer_id,
      identifier_type: decode_identifier_type(&self.identifier_type)?,
      value:           self.value,
      created_at:      decode_dt(&self.created_at)?,
    })
  }
}

#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator as _;

  use super::*;

  #[test]
  fn identifier_type_round_trips_through_column_text() {
    for t in IdentifierType::iter() {
      assert_eq!(decode_identifier_type(encode_identifier_type(t)).unwrap(), t);
    }
    assert_eq!(
      encode_identifier_type(IdentifierType::ContractNumber),
      "contract_number"
    );
  }

  #[test]
  fn unknown_identifier_type_is_an_error() {
    assert!(matches!(
      decode_identifier_type("meter_number"),
      Err(Error::Core(vanduo_core::Error::UnknownIdentifierType(_)))
    ));
  }

  #[test]
  fn bad_timestamp_is_an_error() {
    assert!(matches!(decode_dt("yesterday"), Err(Error::DateParse(_))));
  }
}
