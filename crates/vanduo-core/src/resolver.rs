//! Resolve a raw, user-supplied identifier to the customer that owns it.
//!
//! The pipeline is: reject blank input, [`normalize`], [`classify`], then a
//! single [`IdentifierIndex::find_owner`] lookup. Nothing is written.

use serde::Serialize;
use thiserror::Error;

use crate::{
  Error,
  classify::classify,
  customer::Customer,
  identifier::IdentifierType,
  normalize::normalize,
  store::IdentifierIndex,
};

/// A successful lookup: the inferred type and the owning customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMatch {
  pub matched_type: IdentifierType,
  pub customer:     Customer,
}

/// Outcome of [`resolve`] for non-blank input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
  Matched(ResolvedMatch),
  /// The normalised value fits none of the identifier shapes.
  Unclassified { value: String },
  /// Well-formed, but no customer has registered this value.
  NoMatch {
    matched_type: IdentifierType,
    value:        String,
  },
}

#[derive(Debug, Error)]
pub enum ResolveError<E> {
  #[error(transparent)]
  Invalid(#[from] Error),

  #[error("identifier index error: {0}")]
  Index(#[source] E),
}

/// Resolve `raw` against `index`.
///
/// Blank or whitespace-only input fails with [`Error::EmptyIdentifier`]
/// before normalisation. Index failures are passed through untouched.
pub async fn resolve<I>(
  index: &I,
  raw: &str,
) -> Result<Resolution, ResolveError<I::Error>>
where
  I: IdentifierIndex,
{
  if raw.trim().is_empty() {
    return Err(Error::EmptyIdentifier.into());
  }

  let value = normalize(raw);
  let matched_type = match classify(&value) {
    Ok(t) => t,
    Err(_) => return Ok(Resolution::Unclassified { value }),
  };

  let owner = index
    .find_owner(matched_type, &value)
    .await
    .map_err(ResolveError::Index)?;

  Ok(match owner {
    Some(customer) => {
      Resolution::Matched(ResolvedMatch { matched_type, customer })
    }
    None => Resolution::NoMatch { matched_type, value },
  })
}
