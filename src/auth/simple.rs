//! Identifier/password authentication.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::{Authenticator, CachedToken, SessionHeaders};
use crate::clients::{HttpClient, Transport};
use crate::config::{Identifier, MyGasConfig, Password, SESSION_LIFETIME};
use crate::error::{ApiError, AuthError, ConfigError};
use crate::queries::{Operation, SignIn, SignInPayload};

/// Signs in with an identifier and password and caches the issued token.
///
/// The cache lock is held from the freshness check until the new token is
/// stored, so concurrent callers never issue more than one sign-in request.
#[derive(Debug)]
pub struct SimpleAuth {
    identifier: Identifier,
    password: Password,
    transport: Arc<dyn Transport>,
    headers: Arc<SessionHeaders>,
    token: Mutex<CachedToken>,
}

impl SimpleAuth {
    /// Creates an authenticator sending its sign-in requests through `transport`.
    ///
    /// The sign-in presents the device identity carried by `headers`.
    #[must_use]
    pub fn new(
        identifier: Identifier,
        password: Password,
        transport: Arc<dyn Transport>,
        headers: Arc<SessionHeaders>,
    ) -> Self {
        Self {
            identifier,
            password,
            transport,
            headers,
            token: Mutex::new(CachedToken::default()),
        }
    }

    /// Creates an authenticator with its own HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn from_config(config: &MyGasConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.identifier().clone(),
            config.password().clone(),
            Arc::new(HttpClient::from_config(config)?),
            Arc::new(SessionHeaders::from_config(config)),
        ))
    }

    /// Seeds the cache, e.g. with a token persisted by an earlier run.
    #[must_use]
    pub fn with_cached_token(mut self, token: CachedToken) -> Self {
        self.token = Mutex::new(token);
        self
    }

    /// Returns a snapshot of the cached token.
    pub async fn cached_token(&self) -> CachedToken {
        self.token.lock().await.clone()
    }

    async fn token_request(&self) -> Result<SignInPayload, AuthError> {
        let query = SignIn::new(
            self.identifier.as_ref(),
            self.password.as_ref(),
            self.headers.device_info(),
        )
        .to_query();

        tracing::debug!(identifier = %self.identifier, "Requesting access token");
        let response = self
            .transport
            .post_json(self.headers.base(), &query.to_json())
            .await
            .map_err(AuthError::Transport)?;

        let payload = SignInPayload::from_value(&query.parse(&response)?)?;
        if payload.has_agreement == Some(false) {
            tracing::info!("Service agreement has not been accepted for this account");
        }
        Ok(payload)
    }
}

#[async_trait]
impl Authenticator for SimpleAuth {
    async fn get_token(&self) -> Result<String, AuthError> {
        let mut cached = self.token.lock().await;

        if cached.needs_refresh_at(Utc::now()) {
            let payload = self.token_request().await?;
            *cached = CachedToken::issue(payload.token, Utc::now(), SESSION_LIFETIME);
            tracing::debug!(expires_at = ?cached.expires_at(), "Access token refreshed");
        }

        cached
            .value()
            .map(String::from)
            .ok_or_else(|| ApiError::rejected(None).into())
    }
}
