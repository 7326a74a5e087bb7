//! Error types for `vanduo-core`.

use thiserror::Error;

use crate::identifier::IdentifierType;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Empty identifier")]
  EmptyIdentifier,

  #[error("Unknown identifier format: {0:?}")]
  Unclassifiable(String),

  #[error("unknown identifier type: {0:?}")]
  UnknownIdentifierType(String),

  #[error("customer id must be > 0, got {0}")]
  InvalidCustomerId(i64),

  #[error("{0} is required")]
  MissingField(&'static str),

  #[error("value {value:?} is not a valid {declared}")]
  TypeMismatch {
    declared: IdentifierType,
    value:    String,
  },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
