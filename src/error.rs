//! Error types for the MyGas API client.
//!
//! Two families live here:
//!
//! - [`ConfigError`]: raised while building configuration values, before any
//!   request is made.
//! - [`ApiError`]: the base error of every API call, with two refined kinds,
//!   [`ParseError`] and [`AuthError`].
//!
//! # Error kinds
//!
//! The envelope contract distinguishes three failures that callers can match on:
//!
//! - [`ApiError::Rejected`]: the server answered `ok: false`
//! - [`ApiError::Parse`]: the server answered `ok: true` but a payload field is missing
//! - [`ApiError::Auth`]: anything that went wrong while obtaining a token
//!
//! Transport failures outside the sign-in flow surface as [`ApiError::Http`].
//!
//! # Example
//!
//! ```rust
//! use mygas_api::{ApiError, ParseError};
//!
//! let err = ApiError::from(ParseError::MissingKey { key: "accounts".to_string() });
//! assert!(matches!(err, ApiError::Parse(_)));
//! assert_eq!(err.to_string(), "Key accounts not found in response");
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Message used when a rejected envelope carries no error text.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid API response";

/// Errors that can occur while configuring the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The account identifier is empty.
    #[error("Identifier cannot be empty. Please provide the e-mail or phone used to sign in.")]
    EmptyIdentifier,

    /// The password is empty.
    #[error("Password cannot be empty.")]
    EmptyPassword,

    /// The endpoint URL is invalid.
    #[error("Invalid endpoint URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://example.com/backend').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClient {
        /// Why the client could not be built.
        reason: String,
    },
}

/// An `ok: true` envelope that does not carry the expected payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A result key is absent from the operation object.
    #[error("Key {key} not found in response")]
    MissingKey {
        /// The missing key.
        key: String,
    },

    /// A result key is present but holds a value of the wrong type.
    #[error("Key {key} has an unexpected value, expected {expected}")]
    InvalidValue {
        /// The offending key.
        key: String,
        /// Description of the expected value.
        expected: &'static str,
    },
}

/// Failure while obtaining an access token.
///
/// Wraps whatever went wrong during the sign-in request so that callers can
/// tell token problems apart from failures of the query they actually issued.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The sign-in request did not complete (connection error or non-2xx status).
    #[error("Token request failed: {0}")]
    Transport(#[source] HttpError),

    /// The sign-in envelope was rejected or malformed.
    #[error(transparent)]
    Api(Box<ApiError>),
}

impl AuthError {
    /// Returns the wrapped envelope error, if the failure came from the envelope.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(inner) => Some(inner),
            Self::Transport(_) => None,
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            // Already an auth failure; avoid nesting.
            ApiError::Auth(inner) => inner,
            other => Self::Api(Box::new(other)),
        }
    }
}

/// Base error for every API operation.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with `ok: false`.
    ///
    /// The message is the server-supplied `error`, or
    /// [`INVALID_RESPONSE_MESSAGE`] when none was given.
    #[error("{message}")]
    Rejected {
        /// Server error text or the fallback message.
        message: String,
    },

    /// The HTTP request failed (connection error, timeout or non-2xx status).
    #[error("HTTP request failed: {0}")]
    Http(#[source] HttpError),

    /// The envelope was accepted but its payload is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A token could not be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl ApiError {
    /// Builds a [`ApiError::Rejected`] from the optional server error text.
    #[must_use]
    pub fn rejected(message: Option<&str>) -> Self {
        Self::Rejected {
            message: message.map_or_else(|| INVALID_RESPONSE_MESSAGE.to_string(), String::from),
        }
    }

    /// Returns `true` for a [`ParseError`].
    #[must_use]
    pub const fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }

    /// Returns `true` for an [`AuthError`].
    #[must_use]
    pub const fn is_auth(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        Self::Http(err)
    }
}

// Verify error types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiError>();
    assert_send_sync::<AuthError>();
};
