//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated account identifier (the e-mail or phone used to sign in).
///
/// # Example
///
/// ```rust
/// use mygas_api::Identifier;
///
/// let identifier = Identifier::new("  user@example.com ").unwrap();
/// assert_eq!(identifier.as_ref(), "user@example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new validated identifier. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyIdentifier`] if the identifier is blank.
    pub fn new(identifier: impl Into<String>) -> Result<Self, ConfigError> {
        let identifier = identifier.into();
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ConfigError::EmptyIdentifier);
        }
        Ok(Self(identifier.to_string()))
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated account password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`, so that configs can be logged safely.
///
/// # Example
///
/// ```rust
/// use mygas_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password. The value is kept verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// The validated URL of the GraphQL backend.
///
/// Besides the full URL, the endpoint exposes the pieces needed for the
/// session headers: the `Host` authority and the `Origin`/`Referer` values
/// sent by web identities.
///
/// # Example
///
/// ```rust
/// use mygas_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://lk.example.com/abr-lka-backend").unwrap();
/// assert_eq!(endpoint.scheme(), "https");
/// assert_eq!(endpoint.authority(), "lk.example.com");
/// assert_eq!(endpoint.origin(), "https://lk.example.com");
/// assert_eq!(endpoint.referer(), "https://lk.example.com/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
    authority_end: usize,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no scheme or no
    /// host, or carries userinfo (`user:password@host`).
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        let remainder = &url[host_start..];
        let authority_len = remainder.find(['/', '?', '#']).unwrap_or(remainder.len());
        // Host, Origin and Referer are sliced from the authority.
        if remainder[..authority_len].contains('@') {
            return Err(invalid());
        }
        let host_len = remainder[..authority_len]
            .find(':')
            .unwrap_or(authority_len);
        if host_len == 0 {
            return Err(invalid());
        }

        Ok(Self {
            scheme_end,
            host_start,
            host_end: host_start + host_len,
            authority_end: host_start + authority_len,
            url,
        })
    }

    /// Returns the URL scheme (e.g. `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name without port.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Returns the host including an explicit port, as sent in the `Host` header.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.url[self.host_start..self.authority_end]
    }

    /// Returns `scheme://authority`, the `Origin` header value.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme(), self.authority())
    }

    /// Returns `scheme://authority/`, the `Referer` header value.
    #[must_use]
    pub fn referer(&self) -> String {
        format!("{}/", self.origin())
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_rejects_blank() {
        assert!(matches!(Identifier::new(""), Err(ConfigError::EmptyIdentifier)));
        assert!(matches!(Identifier::new("   "), Err(ConfigError::EmptyIdentifier)));
    }

    #[test]
    fn test_password_keeps_whitespace_and_masks_debug() {
        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_ref(), " secret ");

        let debug_output = format!("{password:?}");
        assert_eq!(debug_output, "Password(*****)");
        assert!(!debug_output.contains("secret"));
    }

    #[test]
    fn test_password_rejects_empty() {
        assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_endpoint_splits_authority_and_host() {
        let endpoint = Endpoint::new("http://127.0.0.1:8080/abr-lka-backend").unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.host_name(), "127.0.0.1");
        assert_eq!(endpoint.authority(), "127.0.0.1:8080");
        assert_eq!(endpoint.origin(), "http://127.0.0.1:8080");
        assert_eq!(endpoint.referer(), "http://127.0.0.1:8080/");
        assert_eq!(endpoint.as_ref(), "http://127.0.0.1:8080/abr-lka-backend");
    }

    #[test]
    fn test_endpoint_without_path() {
        let endpoint = Endpoint::new("https://example.com").unwrap();
        assert_eq!(endpoint.authority(), "example.com");
        assert_eq!(endpoint.referer(), "https://example.com/");
    }

    #[test]
    fn test_endpoint_rejects_invalid() {
        assert!(Endpoint::new("example.com/backend").is_err());
        assert!(Endpoint::new("https://").is_err());
        assert!(Endpoint::new("://example.com").is_err());
        assert!(Endpoint::new("https://:443/path").is_err());
        assert!(Endpoint::new("https://user:pw@lk.example.com/b").is_err());
        assert!(Endpoint::new("https://user@lk.example.com").is_err());
    }

    #[test]
    fn test_endpoint_allows_at_sign_after_authority() {
        let endpoint = Endpoint::new("https://lk.example.com/b?contact=a@b").unwrap();
        assert_eq!(endpoint.authority(), "lk.example.com");
    }
}
