//! The seam between the request pipeline and the network.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde_json::Value;

use crate::clients::HttpError;

/// HTTP header map attached to a single request.
pub type Headers = HashMap<String, String>;

/// Sends one JSON request to the GraphQL endpoint.
///
/// [`HttpClient`](crate::clients::HttpClient) is the production
/// implementation. Tests substitute their own to count or script calls.
#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// POSTs `body` with the given headers and returns the decoded JSON reply.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on connection failure, a non-2xx status or an
    /// undecodable body.
    async fn post_json(&self, headers: &Headers, body: &Value) -> Result<Value, HttpError>;
}
