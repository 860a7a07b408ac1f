//! High-level client for the MyGas personal account.
//!
//! [`MyGasApi`] exposes one method per backend operation and returns the
//! operation payload as JSON, exactly as the server sent it.

use std::sync::Arc;

use serde_json::Value;

use crate::auth::{Authenticator, SessionHeaders, SimpleAuth};
use crate::clients::{HttpClient, RequestExecutor, Transport};
use crate::config::{DeviceInfo, MyGasConfig};
use crate::error::{ApiError, ConfigError};
use crate::queries::{
    Accounts, Charges, ClientInfo, ElsInfo, IndicationSend, LspuInfo, MeterReading, Operation,
    Payments, Query, Receipt,
};

/// Client for the MyGas GraphQL API.
///
/// Tokens are obtained and refreshed transparently through the
/// authenticator `A`; every method may therefore fail with
/// [`ApiError::Auth`] in addition to its own errors.
///
/// # Thread Safety
///
/// `MyGasApi` is `Send + Sync` whenever its authenticator is, so a single
/// instance can serve concurrent tasks behind an `Arc`.
///
/// # Example
///
/// ```rust,no_run
/// use mygas_api::{Identifier, MyGasApi, MyGasConfig, Password};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MyGasConfig::builder()
///     .identifier(Identifier::new("user@example.com")?)
///     .password(Password::new("secret")?)
///     .build()?;
///
/// let api = MyGasApi::new(&config)?;
/// let accounts = api.get_accounts().await?;
///
/// for group in accounts["elsGroup"].as_array().into_iter().flatten() {
///     println!("{}", group["els"]["alias"]);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MyGasApi<A = SimpleAuth> {
    executor: RequestExecutor<A>,
}

// Verify MyGasApi is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MyGasApi>();
};

impl MyGasApi<SimpleAuth> {
    /// Creates a client signing in with the configured credentials.
    ///
    /// The HTTP client and session headers are shared between the
    /// authenticator and the request pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::HttpClient`] if the HTTP client cannot be created.
    pub fn new(config: &MyGasConfig) -> Result<Self, ConfigError> {
        let transport: Arc<dyn Transport> = Arc::new(HttpClient::from_config(config)?);
        let headers = Arc::new(SessionHeaders::from_config(config));
        let auth = SimpleAuth::new(
            config.identifier().clone(),
            config.password().clone(),
            Arc::clone(&transport),
            Arc::clone(&headers),
        );

        Ok(Self::with_authenticator(auth, transport, headers))
    }
}

impl<A: Authenticator> MyGasApi<A> {
    /// Creates a client from its parts.
    ///
    /// Meter readings report the device identity carried by `headers`.
    #[must_use]
    pub fn with_authenticator(
        authenticator: A,
        transport: Arc<dyn Transport>,
        headers: Arc<SessionHeaders>,
    ) -> Self {
        Self {
            executor: RequestExecutor::new(authenticator, transport, headers),
        }
    }

    /// Returns the authenticator.
    #[must_use]
    pub const fn authenticator(&self) -> &A {
        self.executor.authenticator()
    }

    /// Returns the device identity this client presents.
    #[must_use]
    pub fn device_info(&self) -> &DeviceInfo {
        self.executor.headers().device_info()
    }

    /// Executes an arbitrary prepared query.
    ///
    /// # Errors
    ///
    /// See [`RequestExecutor::request`].
    pub async fn request(&self, query: &Query) -> Result<Value, ApiError> {
        self.executor.request(query).await
    }

    /// Executes a typed operation.
    ///
    /// # Errors
    ///
    /// See [`RequestExecutor::request`].
    pub async fn execute<O: Operation + Sync>(&self, operation: &O) -> Result<Value, ApiError> {
        self.request(&operation.to_query()).await
    }

    /// Returns the profile of the signed-in client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope is rejected.
    pub async fn get_client_info(&self) -> Result<Value, ApiError> {
        self.execute(&ClientInfo).await
    }

    /// Returns the account groups (`elsGroup`, `lspu`, ...) of the client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope is rejected.
    pub async fn get_accounts(&self) -> Result<Value, ApiError> {
        self.execute(&Accounts).await
    }

    /// Returns details of a unified personal account (ELS).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope is rejected.
    pub async fn get_els_info(&self, els_id: i64) -> Result<Value, ApiError> {
        self.execute(&ElsInfo::new(els_id)).await
    }

    /// Returns details of a single personal account (LSPU).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope is rejected.
    pub async fn get_lspu_info(&self, lspu_id: i64) -> Result<Value, ApiError> {
        self.execute(&LspuInfo::new(lspu_id)).await
    }

    /// Returns the charges of a personal account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope is rejected.
    pub async fn get_charges(&self, lspu_id: i64) -> Result<Value, ApiError> {
        self.execute(&Charges::new(lspu_id)).await
    }

    /// Returns the payments of a personal account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the envelope is rejected.
    pub async fn get_payments(&self, lspu_id: i64) -> Result<Value, ApiError> {
        self.execute(&Payments::new(lspu_id)).await
    }

    /// Requests a receipt, returning an object with `content` and `url`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if either key is missing, or another
    /// [`ApiError`] if the request fails.
    pub async fn get_receipt(&self, receipt: &Receipt) -> Result<Value, ApiError> {
        self.execute(receipt).await
    }

    /// Submits a meter reading on behalf of this client's device identity.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] if the backend refuses the reading, or
    /// another [`ApiError`] if the request fails.
    pub async fn send_indication(&self, reading: &MeterReading) -> Result<Value, ApiError> {
        tracing::info!(
            lspu_id = reading.lspu_id,
            equipment_id = %reading.equipment_id,
            "Sending meter reading"
        );
        self.execute(&IndicationSend::new(reading, self.device_info()))
            .await
    }
}
