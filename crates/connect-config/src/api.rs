use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the backend base URL.
pub const BASE_URL_VAR: &str = "WORKFLOW_CONNECT_API_BASE_URL";

/// Environment variable holding the request timeout in milliseconds.
pub const TIMEOUT_MS_VAR: &str = "WORKFLOW_CONNECT_API_TIMEOUT_MS";

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Resolve the backend base URL from an optional raw setting.
///
/// Whitespace is trimmed, unset or blank values fall back to
/// [`DEFAULT_BASE_URL`], and trailing slashes are stripped.
pub fn resolve_base_url(raw: Option<&str>) -> String {
  let base = raw
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .unwrap_or(DEFAULT_BASE_URL);
  base.trim_end_matches('/').to_string()
}

/// Connection settings for the backend API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
  /// Base URL without a trailing slash.
  pub base_url: String,

  /// Upper bound for a single request.
  pub timeout: Duration,
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
      timeout: DEFAULT_TIMEOUT,
    }
  }
}

impl ApiConfig {
  /// Load configuration from the process environment.
  pub fn from_env() -> Result<Self, ConfigError> {
    Self::from_lookup(|var| std::env::var(var).ok())
  }

  /// Load configuration using an arbitrary variable lookup.
  pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
  where
    F: Fn(&str) -> Option<String>,
  {
    let base_url = resolve_base_url(lookup(BASE_URL_VAR).as_deref());

    let timeout = match lookup(TIMEOUT_MS_VAR) {
      Some(raw) if !raw.trim().is_empty() => parse_timeout_ms(TIMEOUT_MS_VAR, &raw)?,
      _ => DEFAULT_TIMEOUT,
    };

    Ok(Self { base_url, timeout })
  }

  /// Override the base URL. The value goes through the same resolution as
  /// the environment setting.
  pub fn with_base_url(mut self, raw: &str) -> Self {
    self.base_url = resolve_base_url(Some(raw));
    self
  }

  /// Override the request timeout.
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Timeout in whole milliseconds, as reported in errors and logs.
  pub fn timeout_ms(&self) -> u64 {
    self.timeout.as_millis() as u64
  }
}

fn parse_timeout_ms(var: &str, raw: &str) -> Result<Duration, ConfigError> {
  let ms: u64 = raw.trim().parse().map_err(|e| ConfigError::InvalidValue {
    var: var.to_string(),
    message: format!("{e}"),
  })?;

  if ms == 0 {
    return Err(ConfigError::InvalidValue {
      var: var.to_string(),
      message: "timeout must be greater than zero".to_string(),
    });
  }

  Ok(Duration::from_millis(ms))
}
