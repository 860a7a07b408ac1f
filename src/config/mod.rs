//! Configuration types for the MyGas API client.
//!
//! # Overview
//!
//! - [`MyGasConfig`]: credentials, endpoint, device identity and transport settings
//! - [`MyGasConfigBuilder`]: a builder for constructing [`MyGasConfig`] instances
//! - [`Identifier`], [`Password`], [`Endpoint`]: validated newtypes
//! - [`DeviceInfo`]: the synthetic device identity presented to the backend
//!
//! # Example
//!
//! ```rust
//! use mygas_api::{Identifier, MyGasConfig, Password};
//!
//! let config = MyGasConfig::builder()
//!     .identifier(Identifier::new("user@example.com").unwrap())
//!     .password(Password::new("secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), mygas_api::config::DEFAULT_ENDPOINT);
//! ```

mod device;
mod newtypes;

pub use device::{AppProfile, DeviceInfo, MOBILE_USER_AGENT, NATIVE_APP_BROWSER};
pub use newtypes::{Endpoint, Identifier, Password};

use std::time::Duration;

use crate::error::ConfigError;

/// Host of the public backend.
pub const DEFAULT_HOST: &str = "xn--80afnfom.xn--80ahmohdapg.xn--80asehdb";

/// GraphQL endpoint of the public backend.
pub const DEFAULT_ENDPOINT: &str =
    "https://xn--80afnfom.xn--80ahmohdapg.xn--80asehdb/abr-lka-backend";

/// Header carrying the access token on authenticated requests.
pub const TOKEN_HEADER: &str = "token";

/// Margin before nominal expiry at which a token is refreshed anyway.
pub const CLOCK_SKEW_TOLERANCE: Duration = Duration::from_secs(20);

/// Lifetime assumed for a freshly issued token.
///
/// The backend does not report an expiry; its tokens outlive ordinary usage.
pub const SESSION_LIFETIME: Duration = Duration::from_secs(525_600);

/// Configuration for the MyGas API client.
///
/// The device identity is fixed when the configuration is built, so every
/// client created from one config presents the same device.
#[derive(Clone, Debug)]
pub struct MyGasConfig {
    identifier: Identifier,
    password: Password,
    endpoint: Endpoint,
    device_info: DeviceInfo,
    timeout: Option<Duration>,
}

impl MyGasConfig {
    /// Creates a new builder for constructing a `MyGasConfig`.
    #[must_use]
    pub fn builder() -> MyGasConfigBuilder {
        MyGasConfigBuilder::new()
    }

    /// Returns the account identifier.
    #[must_use]
    pub const fn identifier(&self) -> &Identifier {
        &self.identifier
    }

    /// Returns the account password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the device identity.
    #[must_use]
    pub const fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    /// Returns the transport timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// Verify MyGasConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MyGasConfig>();
};

/// Builder for constructing [`MyGasConfig`] instances.
///
/// Required fields are `identifier` and `password`.
///
/// # Defaults
///
/// - `endpoint`: [`DEFAULT_ENDPOINT`]
/// - `device_info`: a random identity from the built-in pool
/// - `timeout`: `None` (no timeout beyond the HTTP stack's own)
#[derive(Debug, Default)]
pub struct MyGasConfigBuilder {
    identifier: Option<Identifier>,
    password: Option<Password>,
    endpoint: Option<Endpoint>,
    device_info: Option<DeviceInfo>,
    timeout: Option<Duration>,
}

impl MyGasConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the account identifier (required).
    #[must_use]
    pub fn identifier(mut self, identifier: Identifier) -> Self {
        self.identifier = Some(identifier);
        self
    }

    /// Sets the account password (required).
    #[must_use]
    pub fn password(mut self, password: Password) -> Self {
        self.password = Some(password);
        self
    }

    /// Overrides the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Pins the device identity instead of picking a random one.
    #[must_use]
    pub fn device_info(mut self, device_info: DeviceInfo) -> Self {
        self.device_info = Some(device_info);
        self
    }

    /// Sets a timeout applied to every HTTP request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`MyGasConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `identifier` or
    /// `password` are not set, and [`ConfigError::InvalidEndpoint`] if the
    /// default endpoint cannot be parsed.
    pub fn build(self) -> Result<MyGasConfig, ConfigError> {
        let identifier = self.identifier.ok_or(ConfigError::MissingRequiredField {
            field: "identifier",
        })?;
        let password = self
            .password
            .ok_or(ConfigError::MissingRequiredField { field: "password" })?;
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Endpoint::new(DEFAULT_ENDPOINT)?,
        };

        Ok(MyGasConfig {
            identifier,
            password,
            endpoint,
            device_info: self.device_info.unwrap_or_else(DeviceInfo::random),
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> MyGasConfigBuilder {
        MyGasConfig::builder()
            .identifier(Identifier::new("user@example.com").unwrap())
            .password(Password::new("secret").unwrap())
    }

    #[test]
    fn test_builder_requires_identifier() {
        let result = MyGasConfigBuilder::new()
            .password(Password::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "identifier"
            })
        ));
    }

    #[test]
    fn test_builder_requires_password() {
        let result = MyGasConfigBuilder::new()
            .identifier(Identifier::new("user").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "password" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = credentials().build().unwrap();

        assert_eq!(config.endpoint().as_ref(), DEFAULT_ENDPOINT);
        assert_eq!(config.endpoint().authority(), DEFAULT_HOST);
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let device = DeviceInfo::default();
        let config = credentials()
            .endpoint(Endpoint::new("http://localhost:9000/graphql").unwrap())
            .device_info(device.clone())
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();

        assert_eq!(config.endpoint().authority(), "localhost:9000");
        assert_eq!(config.device_info(), &device);
        assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_config_debug_masks_password() {
        let config = credentials().build().unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("MyGasConfig"));
        assert!(!debug_str.contains("secret"));
    }

    #[test]
    fn test_clone_keeps_device_identity() {
        let config = credentials().build().unwrap();
        let cloned = config.clone();
        assert_eq!(cloned.device_info(), config.device_info());
    }
}
