//! Request execution with timeout and cancellation.

use std::collections::HashMap;
use std::time::Duration;

use connect_config::ApiConfig;
use reqwest::{Client, Method};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::body::ResponseBody;
use crate::error::ApiError;

/// Options for a single request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
  pub method: Method,
  /// JSON body. When present, `Content-Type: application/json` is sent.
  pub body: Option<serde_json::Value>,
  /// Extra headers, applied after the content type.
  pub headers: HashMap<String, String>,
  /// Overrides the client's configured timeout.
  pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
  fn default() -> Self {
    Self {
      method: Method::GET,
      body: None,
      headers: HashMap::new(),
      timeout: None,
    }
  }
}

/// Client for the Workflow Connect backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
  http: Client,
  config: ApiConfig,
}

impl ApiClient {
  /// Create a client for the given configuration.
  pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
    let http = Client::builder().build()?;
    Ok(Self { http, config })
  }

  pub fn config(&self) -> &ApiConfig {
    &self.config
  }

  /// Full URL for a path relative to the base URL.
  pub fn url_for(&self, path: &str) -> String {
    let separator = if path.starts_with('/') { "" } else { "/" };
    format!("{}{}{}", self.config.base_url, separator, path)
  }

  /// Check whether the backend is reachable.
  ///
  /// Resolves with the response body on any 2xx status.
  pub async fn check_health(&self) -> Result<ResponseBody, ApiError> {
    self.check_health_with_cancel(&CancellationToken::new()).await
  }

  /// Health check that also aborts when `cancel` fires.
  pub async fn check_health_with_cancel(
    &self,
    cancel: &CancellationToken,
  ) -> Result<ResponseBody, ApiError> {
    self.request("/", RequestOptions::default(), cancel).await
  }

  /// Issue a request against the backend.
  ///
  /// The in-flight request is dropped when either the timeout elapses or
  /// `cancel` fires. The timeout timer lives only as long as this call.
  #[instrument(
    name = "api_request",
    skip(self, options, cancel),
    fields(method = %options.method, url = %self.url_for(path))
  )]
  pub async fn request(
    &self,
    path: &str,
    options: RequestOptions,
    cancel: &CancellationToken,
  ) -> Result<ResponseBody, ApiError> {
    if cancel.is_cancelled() {
      return Err(ApiError::Cancelled);
    }

    let url = self.url_for(path);
    let url = Url::parse(&url).map_err(|e| ApiError::InvalidUrl {
      url: url.clone(),
      message: e.to_string(),
    })?;

    let timeout = options.timeout.unwrap_or(self.config.timeout);
    let timeout_ms = timeout.as_millis() as u64;

    tokio::select! {
      biased;
      _ = cancel.cancelled() => {
        warn!("request cancelled by caller");
        Err(ApiError::Cancelled)
      }
      _ = tokio::time::sleep(timeout) => {
        warn!(timeout_ms, "request timed out");
        Err(ApiError::Timeout { timeout_ms })
      }
      result = self.send(url, options) => result,
    }
  }

  async fn send(&self, url: Url, options: RequestOptions) -> Result<ResponseBody, ApiError> {
    let mut request = self.http.request(options.method, url);

    // json() sets the content type; explicit headers may override it
    if let Some(body) = &options.body {
      request = request.json(body);
    }
    for (key, value) in &options.headers {
      request = request.header(key, value);
    }

    let response = request.send().await?;
    let status = response.status();
    let text = response.text().await?;
    let body = ResponseBody::parse(&text);

    debug!(status = status.as_u16(), "response received");

    if !status.is_success() {
      let message = body
        .error_message()
        .unwrap_or_else(|| format!("Request failed ({})", status.as_u16()));
      return Err(ApiError::Http {
        status: status.as_u16(),
        message,
        body,
      });
    }

    Ok(body)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn client(base: &str) -> ApiClient {
    ApiClient::new(ApiConfig::default().with_base_url(base)).unwrap()
  }

  #[test]
  fn test_url_for_joins_paths() {
    let client = client("http://localhost:3001/");
    assert_eq!(client.url_for("/"), "http://localhost:3001/");
    assert_eq!(client.url_for("workflows"), "http://localhost:3001/workflows");
    assert_eq!(client.url_for("/runs/1"), "http://localhost:3001/runs/1");
  }

  #[tokio::test]
  async fn test_precancelled_token_short_circuits() {
    let client = client("http://localhost:3001");
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client.check_health_with_cancel(&cancel).await.unwrap_err();
    assert!(matches!(err, ApiError::Cancelled));
    assert!(err.is_network_failure());
  }

  #[tokio::test]
  async fn test_invalid_base_url() {
    let client = client("not a url");
    let err = client.check_health().await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidUrl { .. }));
    assert_eq!(err.status(), None);
  }
}
