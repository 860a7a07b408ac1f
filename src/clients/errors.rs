//! HTTP-level error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the backend
//! - [`HttpError`]: every failure of a single HTTP exchange
//!
//! # Example
//!
//! ```rust,ignore
//! use mygas_api::clients::{HttpError, Transport};
//!
//! match transport.post_json(&headers, &body).await {
//!     Ok(response) => println!("{response}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(HttpError::Decode(e)) => println!("Invalid JSON: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when the backend answers with a non-successful status.
///
/// # Example
///
/// ```rust
/// use mygas_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 503,
///     message: "Service Unavailable".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Service Unavailable");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body, or the status reason when the body is empty.
    pub message: String,
}

/// Unified error type for a single HTTP exchange.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Non-2xx HTTP response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Connection failure or timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A 2xx response whose body is not valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpResponseError>();
    assert_send_sync::<HttpError>();
};
