//! The authenticated request pipeline.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::{Authenticator, SessionHeaders};
use crate::clients::Transport;
use crate::error::ApiError;
use crate::queries::Query;

/// Sends operations with a current token and decodes their envelopes.
///
/// For every request the executor obtains a token from its
/// [`Authenticator`], attaches it to a copy of the session headers, posts the
/// query and parses the reply with [`Query::parse`].
#[derive(Debug)]
pub struct RequestExecutor<A> {
    authenticator: A,
    transport: Arc<dyn Transport>,
    headers: Arc<SessionHeaders>,
}

impl<A: Authenticator> RequestExecutor<A> {
    /// Creates an executor.
    #[must_use]
    pub fn new(
        authenticator: A,
        transport: Arc<dyn Transport>,
        headers: Arc<SessionHeaders>,
    ) -> Self {
        Self {
            authenticator,
            transport,
            headers,
        }
    }

    /// Returns the authenticator.
    #[must_use]
    pub const fn authenticator(&self) -> &A {
        &self.authenticator
    }

    /// Returns the session headers.
    #[must_use]
    pub fn headers(&self) -> &SessionHeaders {
        &self.headers
    }

    /// Executes a query and returns its payload.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Auth`] if no token could be obtained
    /// - [`ApiError::Http`] if the request itself failed
    /// - [`ApiError::Rejected`] or [`ApiError::Parse`] from the envelope
    pub async fn request(&self, query: &Query) -> Result<Value, ApiError> {
        let token = self.authenticator.get_token().await?;
        let headers = self.headers.with_token(&token);

        let response = self.transport.post_json(&headers, &query.to_json()).await?;
        query.parse(&response)
    }
}
