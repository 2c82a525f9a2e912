use thiserror::Error;

/// Errors that can occur while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  /// A variable was set but could not be parsed.
  #[error("invalid value for {var}: {message}")]
  InvalidValue { var: String, message: String },
}
