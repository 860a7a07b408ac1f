//! Sign-in mutation issuing the access token.

use std::fmt;

use serde_json::{json, Map, Value};

use super::{Operation, ResultKey};
use crate::config::DeviceInfo;
use crate::error::{ApiError, ParseError};

const ATTR_TOKEN: &str = "token";
const ATTR_HAS_AGREEMENT: &str = "hasAgreement";

/// The `signInN3` mutation.
///
/// Its `Debug` output masks the password.
#[derive(Clone, Copy)]
pub struct SignIn<'a> {
    identifier: &'a str,
    password: &'a str,
    device_info: &'a DeviceInfo,
}

impl<'a> SignIn<'a> {
    /// Creates the mutation for the given credentials and device identity.
    #[must_use]
    pub const fn new(identifier: &'a str, password: &'a str, device_info: &'a DeviceInfo) -> Self {
        Self {
            identifier,
            password,
            device_info,
        }
    }
}

impl fmt::Debug for SignIn<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignIn")
            .field("identifier", &self.identifier)
            .field("password", &"*****")
            .field("device_info", self.device_info)
            .finish()
    }
}

impl Operation for SignIn<'_> {
    const OPERATION_NAME: &'static str = "signInN3";
    const DOCUMENT: &'static str = include_str!("documents/sign_in.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Multiple(&[ATTR_TOKEN, ATTR_HAS_AGREEMENT]);

    fn variables(&self) -> Map<String, Value> {
        let mut variables = Map::new();
        variables.insert(
            "input".to_string(),
            json!({
                "agreement": false,
                "identifier": self.identifier,
                "password": self.password,
                "rememberMe": true,
            }),
        );
        variables.insert("deviceInfo".to_string(), json!(self.device_info));
        variables
    }
}

/// Decoded result of [`SignIn`].
#[derive(Clone, PartialEq, Eq)]
pub struct SignInPayload {
    /// The access token.
    pub token: String,
    /// Whether the user has accepted the service agreement, if reported.
    pub has_agreement: Option<bool>,
}

impl SignInPayload {
    /// Decodes the object produced by parsing a [`SignIn`] response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Parse`] if `token` is missing or not a string.
    pub fn from_value(value: &Value) -> Result<Self, ApiError> {
        let token = value
            .get(ATTR_TOKEN)
            .ok_or_else(|| ParseError::MissingKey {
                key: ATTR_TOKEN.to_string(),
            })?
            .as_str()
            .ok_or(ParseError::InvalidValue {
                key: ATTR_TOKEN.to_string(),
                expected: "a string",
            })?;

        Ok(Self {
            token: token.to_string(),
            has_agreement: value.get(ATTR_HAS_AGREEMENT).and_then(Value::as_bool),
        })
    }
}

impl fmt::Debug for SignInPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignInPayload")
            .field("token", &"*****")
            .field("has_agreement", &self.has_agreement)
            .finish()
    }
}
