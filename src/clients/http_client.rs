//! HTTP client for the MyGas GraphQL endpoint.
//!
//! This module provides [`HttpClient`], the reqwest-backed [`Transport`].

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::transport::{Headers, Transport};
use crate::config::{Endpoint, MyGasConfig};
use crate::error::ConfigError;

/// HTTP client posting GraphQL requests to a single endpoint.
///
/// Every request is a JSON `POST` to the endpoint URL. Headers are supplied
/// per call, so one client serves both the sign-in request and the
/// authenticated operations.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust
/// use mygas_api::clients::HttpClient;
/// use mygas_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://example.com/backend").unwrap();
/// let client = HttpClient::new(endpoint, None).unwrap();
/// assert_eq!(client.endpoint().as_ref(), "https://example.com/backend");
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: Endpoint,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created.
    pub fn new(endpoint: Endpoint, timeout: Option<Duration>) -> Result<Self, ConfigError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| ConfigError::HttpClient {
            reason: e.to_string(),
        })?;

        Ok(Self { client, endpoint })
    }

    /// Creates a client from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the underlying reqwest client
    /// cannot be created.
    pub fn from_config(config: &MyGasConfig) -> Result<Self, ConfigError> {
        Self::new(config.endpoint().clone(), config.timeout())
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn post_json(&self, headers: &Headers, body: &Value) -> Result<Value, HttpError> {
        let operation = body
            .get("operationName")
            .and_then(Value::as_str)
            .unwrap_or_default();
        tracing::debug!(operation, endpoint = %self.endpoint, "Sending request");

        let mut req_builder = self.client.post(self.endpoint.as_ref()).json(body);
        for (key, value) in headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;
        let status = res.status();
        let body_text = res.text().await?;

        if !status.is_success() {
            tracing::warn!(operation, status = status.as_u16(), "Request failed");
            let message = if body_text.trim().is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string()
            } else {
                body_text
            };
            return Err(HttpResponseError {
                code: status.as_u16(),
                message,
            }
            .into());
        }

        tracing::debug!(operation, status = status.as_u16(), "Received response");
        Ok(serde_json::from_str(&body_text)?)
    }
}
