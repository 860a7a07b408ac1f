//! Base headers shared by every request of one client.

use std::collections::HashMap;

use crate::clients::Headers;
use crate::config::{DeviceInfo, Endpoint, MyGasConfig, TOKEN_HEADER};

/// The fixed request headers of one client.
///
/// Built once from the endpoint and device identity and never modified
/// afterwards, so one instance can be shared by concurrent requests.
/// [`with_token`](Self::with_token) composes a per-request copy.
///
/// The identity the headers were built from travels with them, and every
/// `deviceInfo` variable is read back through [`device_info`](Self::device_info).
///
/// # Example
///
/// ```rust
/// use mygas_api::auth::SessionHeaders;
/// use mygas_api::{DeviceInfo, Endpoint};
///
/// let endpoint = Endpoint::new("https://example.com/backend").unwrap();
/// let headers = SessionHeaders::new(&endpoint, &DeviceInfo::default());
///
/// let request_headers = headers.with_token("abc");
/// assert_eq!(request_headers["token"], "abc");
/// assert!(headers.get("token").is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionHeaders {
    base: Headers,
    device_info: DeviceInfo,
}

impl SessionHeaders {
    /// Builds the headers for an endpoint and device identity.
    ///
    /// Web identities additionally send `Origin` and `Referer`.
    #[must_use]
    pub fn new(endpoint: &Endpoint, device_info: &DeviceInfo) -> Self {
        let mut base = HashMap::new();
        base.insert("Host".to_string(), endpoint.authority().to_string());
        base.insert("User-Agent".to_string(), device_info.user_agent().to_string());

        if !device_info.is_native_app() {
            base.insert("Origin".to_string(), endpoint.origin());
            base.insert("Referer".to_string(), endpoint.referer());
        }

        Self {
            base,
            device_info: device_info.clone(),
        }
    }

    /// Builds the headers from a configuration.
    #[must_use]
    pub fn from_config(config: &MyGasConfig) -> Self {
        Self::new(config.endpoint(), config.device_info())
    }

    /// Returns the device identity these headers present.
    #[must_use]
    pub const fn device_info(&self) -> &DeviceInfo {
        &self.device_info
    }

    /// Returns the base headers, without authorization.
    #[must_use]
    pub const fn base(&self) -> &Headers {
        &self.base
    }

    /// Returns a single base header.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.base.get(name).map(String::as_str)
    }

    /// Returns a copy of the base headers carrying the access token.
    #[must_use]
    pub fn with_token(&self, token: &str) -> Headers {
        let mut headers = self.base.clone();
        headers.insert(TOKEN_HEADER.to_string(), token.to_string());
        headers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::new("https://lk.example.com/abr-lka-backend").unwrap()
    }

    #[test]
    fn test_native_app_headers() {
        let headers = SessionHeaders::new(&endpoint(), &DeviceInfo::default());

        assert_eq!(headers.get("Host"), Some("lk.example.com"));
        assert_eq!(headers.get("User-Agent"), Some("Dart/2.19 (dart:io)"));
        assert!(headers.get("Origin").is_none());
        assert!(headers.get("Referer").is_none());
    }

    #[test]
    fn test_web_headers_include_origin_and_referer() {
        let device = DeviceInfo {
            app_name: "desktop".to_string(),
            browser: "Mozilla/5.0 Test".to_string(),
            ..DeviceInfo::default()
        };
        let headers = SessionHeaders::new(&endpoint(), &device);

        assert_eq!(headers.get("User-Agent"), Some("Mozilla/5.0 Test"));
        assert_eq!(headers.get("Origin"), Some("https://lk.example.com"));
        assert_eq!(headers.get("Referer"), Some("https://lk.example.com/"));
        assert_eq!(headers.device_info(), &device);
    }

    #[test]
    fn test_with_token_does_not_touch_base() {
        let headers = SessionHeaders::new(&endpoint(), &DeviceInfo::default());

        let first = headers.with_token("one");
        let second = headers.with_token("two");

        assert_eq!(first["token"], "one");
        assert_eq!(second["token"], "two");
        assert!(!headers.base().contains_key("token"));
        assert_eq!(first.len(), headers.base().len() + 1);
    }
}
