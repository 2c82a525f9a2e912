//! Connect Config
//!
//! This crate resolves the configuration the console needs to talk to its
//! backend. There is exactly one backend setting, the API base URL, plus the
//! request timeout applied to every call.
//!
//! Configuration can come from:
//! - Environment variables (`WORKFLOW_CONNECT_API_BASE_URL`,
//!   `WORKFLOW_CONNECT_API_TIMEOUT_MS`)
//! - Explicit overrides (CLI flags)
//!
//! Unset or blank values fall back to the defaults in this crate.

mod api;
mod error;

pub use api::{
  ApiConfig, BASE_URL_VAR, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TIMEOUT_MS_VAR, resolve_base_url,
};
pub use error::ConfigError;
