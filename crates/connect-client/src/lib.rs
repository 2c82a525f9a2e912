//! Connect Client
//!
//! A thin HTTP client for the Workflow Connect backend. The backend currently
//! exposes a single health endpoint; [`ApiClient::request`] is the general
//! entry point that future routes will go through.
//!
//! Every request is bounded by a timeout and can be aborted through a
//! [`CancellationToken`](tokio_util::sync::CancellationToken). Failures are
//! reported as a single [`ApiError`] and are never retried.

mod body;
mod client;
mod error;

pub use body::ResponseBody;
pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
