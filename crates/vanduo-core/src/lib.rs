//! Core types and trait definitions for the Vanduo account API.
//!
//! This crate is deliberately free of HTTP and database dependencies. It owns
//! the identifier pipeline (normalise, classify, resolve) and the store traits
//! that backends implement.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod classify;
pub mod customer;
pub mod error;
pub mod identifier;
pub mod normalize;
pub mod resolver;
pub mod store;

pub use classify::classify;
pub use error::{Error, Result};
pub use normalize::normalize;
pub use resolver::{Resolution, ResolveError, ResolvedMatch, resolve};
