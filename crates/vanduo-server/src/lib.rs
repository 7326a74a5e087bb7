//! HTTP server wiring for the Vanduo account API.
//!
//! Loads [`ServerConfig`], opens the SQLite store and mounts
//! [`vanduo_api::api_router`] under `/api`.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use vanduo_store_sqlite::SqliteStore;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Built from defaults, then an optional TOML file, then `VANDUO_*`
/// environment variables, later sources winning.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
}

impl ServerConfig {
  pub fn load(file: &Path) -> Result<Self, config::ConfigError> {
    config::Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080)?
      .set_default("store_path", "vanduo.db")?
      .add_source(config::File::from(file).required(false))
      .add_source(config::Environment::with_prefix("VANDUO"))
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The full application router: the JSON API under `/api`, with request
/// tracing.
pub fn app(store: Arc<SqliteStore>) -> Router {
  Router::new()
    .nest("/api", vanduo_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}
