use thiserror::Error;

use crate::body::ResponseBody;

/// Errors that can occur while talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request URL could not be built from the configured base URL.
  #[error("invalid request url '{url}': {message}")]
  InvalidUrl { url: String, message: String },

  /// The request did not complete within the timeout and was aborted.
  #[error("Request timed out after {timeout_ms}ms")]
  Timeout { timeout_ms: u64 },

  /// The caller's cancellation token fired before the request completed.
  #[error("request cancelled")]
  Cancelled,

  /// Transport-level failure (connect, DNS, broken body).
  #[error("network error: {0}")]
  Network(#[from] reqwest::Error),

  /// The backend answered with a non-2xx status.
  #[error("{message}")]
  Http {
    status: u16,
    message: String,
    body: ResponseBody,
  },
}

impl ApiError {
  /// True for failures where no HTTP response was received.
  pub fn is_network_failure(&self) -> bool {
    matches!(self, Self::Network(_) | Self::Timeout { .. } | Self::Cancelled)
  }

  /// True if the request was aborted by its timeout.
  pub fn is_timeout(&self) -> bool {
    matches!(self, Self::Timeout { .. })
  }

  /// HTTP status of the response, when one was received.
  pub fn status(&self) -> Option<u16> {
    match self {
      Self::Http { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// Body of the failed response, kept for diagnostics.
  pub fn body(&self) -> Option<&ResponseBody> {
    match self {
      Self::Http { body, .. } => Some(body),
      _ => None,
    }
  }
}
