//! SQLite backend for the Vanduo account store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime. The `identifiers` table carries the
//! `(identifier_type, value)` uniqueness constraint the resolver relies on.

mod encode;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
