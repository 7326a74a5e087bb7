//! Error type for `vanduo-store-sqlite`.
//!
//! Only infrastructure failures live here. Duplicate identifiers and unknown
//! customers are domain outcomes reported through
//! [`vanduo_core::identifier::Registration`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] vanduo_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("date/time parse error: {0}")]
  DateParse(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
