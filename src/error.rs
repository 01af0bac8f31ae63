//! Provider-level error types.
//!
//! Transport, status, decode and configuration failures all surface as
//! [`ClientError`]; the app collapses them into a single generic alert at
//! the controller boundary, so no finer distinction is carried into the
//! UI layer.

use thiserror::Error;

use crate::traits::HttpError;

/// Errors produced by the library client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP request itself failed (connection, timeout, invalid URL).
    #[error("request failed: {0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("server returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body could not be decoded into the expected model.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The planets document was requested but no URL is configured.
    #[error("planets URL not configured")]
    PlanetsUrlMissing,
}

/// Result alias for provider operations.
pub type ClientResult<T> = Result<T, ClientError>;
