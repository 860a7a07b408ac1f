//! GraphQL operations understood by the MyGas backend.
//!
//! Every operation is a fixed document. An operation type implements
//! [`Operation`], which pins its name, document and result key(s) and
//! derives the variables from the type's fields. [`Operation::to_query`]
//! turns it into an immutable [`Query`], the value the request pipeline
//! actually sends and uses to decode the response.
//!
//! # Envelope contract
//!
//! Every response wraps its payload as
//! `{"data": {<operationName>: {"ok": bool, "error": string|null, ...}}}`.
//! [`Query::parse`] checks `ok` first and only then extracts the payload:
//!
//! - `ok` false or absent: [`ApiError::Rejected`] with the server `error`
//!   text, or `"Invalid API response"` when there is none
//! - `ok` true but a result key absent: [`ApiError::Parse`]
//!
//! # Example
//!
//! ```rust
//! use mygas_api::queries::{Query, ResultKey};
//! use serde_json::{json, Map};
//!
//! let query = Query::new("op", "query op { op { ok error k } }", Map::new(), ResultKey::Single("k"));
//! let response = json!({"data": {"op": {"ok": true, "error": null, "k": "v"}}});
//! assert_eq!(query.parse(&response).unwrap(), json!("v"));
//! ```

mod accounts;
mod charges;
mod client;
mod els_info;
mod indication_send;
mod lspu_info;
mod payments;
mod receipt;
mod sign_in;

pub use accounts::Accounts;
pub use charges::Charges;
pub use client::ClientInfo;
pub use els_info::ElsInfo;
pub use indication_send::{IndicationSend, MeterReading};
pub use lspu_info::LspuInfo;
pub use payments::Payments;
pub use receipt::Receipt;
pub use sign_in::{SignIn, SignInPayload};

use serde_json::{json, Map, Value};

use crate::error::{ApiError, ParseError};

const ATTR_DATA: &str = "data";
const ATTR_OK: &str = "ok";
const ATTR_ERROR: &str = "error";

/// Which payload field(s) of the operation object make up the result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKey {
    /// The result is the value of this single field.
    Single(&'static str),
    /// The result is an object holding these fields, in this order.
    Multiple(&'static [&'static str]),
}

/// An immutable description of one GraphQL request.
#[derive(Clone, Debug, PartialEq)]
pub struct Query {
    operation_name: &'static str,
    document: &'static str,
    variables: Map<String, Value>,
    result_key: ResultKey,
}

impl Query {
    /// Creates a query from its parts.
    #[must_use]
    pub const fn new(
        operation_name: &'static str,
        document: &'static str,
        variables: Map<String, Value>,
        result_key: ResultKey,
    ) -> Self {
        Self {
            operation_name,
            document,
            variables,
            result_key,
        }
    }

    /// Returns the GraphQL operation name.
    #[must_use]
    pub const fn operation_name(&self) -> &'static str {
        self.operation_name
    }

    /// Returns the query or mutation document.
    #[must_use]
    pub const fn document(&self) -> &'static str {
        self.document
    }

    /// Returns the variables sent with the document.
    #[must_use]
    pub const fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    /// Returns the key(s) the result is extracted from.
    #[must_use]
    pub const fn result_key(&self) -> ResultKey {
        self.result_key
    }

    /// Returns the request body: `{"operationName", "query", "variables"}`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        json!({
            "operationName": self.operation_name,
            "query": self.document,
            "variables": self.variables,
        })
    }

    /// Extracts this operation's payload from a response envelope.
    ///
    /// A present `null` payload field is returned as [`Value::Null`]; only an
    /// absent key is a parse failure.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when the envelope is not `ok`, and
    /// [`ApiError::Parse`] naming the first missing result key otherwise.
    pub fn parse(&self, response: &Value) -> Result<Value, ApiError> {
        let empty = Map::new();
        let operation = response
            .get(ATTR_DATA)
            .and_then(|data| data.get(self.operation_name))
            .and_then(Value::as_object)
            .unwrap_or(&empty);

        let ok = operation
            .get(ATTR_OK)
            .and_then(Value::as_bool)
            .unwrap_or(false);
        if !ok {
            let error = match operation.get(ATTR_ERROR) {
                Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
                None | Some(Value::Null | Value::String(_)) => None,
                Some(other) => Some(other.to_string()),
            };
            tracing::warn!(
                operation = self.operation_name,
                error = error.as_deref().unwrap_or_default(),
                "API rejected request"
            );
            return Err(ApiError::rejected(error.as_deref()));
        }

        match self.result_key {
            ResultKey::Single(key) => extract(operation, key).cloned(),
            ResultKey::Multiple(keys) => {
                let mut result = Map::with_capacity(keys.len());
                for key in keys {
                    result.insert((*key).to_string(), extract(operation, key)?.clone());
                }
                Ok(Value::Object(result))
            }
        }
    }
}

fn extract<'a>(operation: &'a Map<String, Value>, key: &str) -> Result<&'a Value, ApiError> {
    operation.get(key).ok_or_else(|| {
        ParseError::MissingKey {
            key: key.to_string(),
        }
        .into()
    })
}

/// A typed GraphQL operation.
///
/// Implementors fix the operation name, document and result key(s) and
/// provide the variables from their own fields.
pub trait Operation {
    /// GraphQL operation name, also the key of the envelope object.
    const OPERATION_NAME: &'static str;
    /// The query or mutation document.
    const DOCUMENT: &'static str;
    /// Payload field(s) forming the result.
    const RESULT_KEY: ResultKey;

    /// Returns the variables for this operation.
    fn variables(&self) -> Map<String, Value> {
        Map::new()
    }

    /// Builds the immutable [`Query`] for this operation.
    fn to_query(&self) -> Query {
        Query::new(
            Self::OPERATION_NAME,
            Self::DOCUMENT,
            self.variables(),
            Self::RESULT_KEY,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(key: &'static str) -> Query {
        Query::new("test", "query test { test }", Map::new(), ResultKey::Single(key))
    }

    #[test]
    fn test_to_json_has_exactly_three_keys() {
        let mut variables = Map::new();
        variables.insert("lspuId".to_string(), json!(42));
        let query = Query::new("test", "query test { test }", variables, ResultKey::Single("k"));

        let payload = query.to_json();
        let object = payload.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(payload["operationName"], "test");
        assert_eq!(payload["query"], "query test { test }");
        assert_eq!(payload["variables"], json!({"lspuId": 42}));
    }

    #[test]
    fn test_parse_single_key() {
        let response = json!({"data": {"test": {"ok": true, "error": null, "test_data": "test_data"}}});
        assert_eq!(single("test_data").parse(&response).unwrap(), json!("test_data"));
    }

    #[test]
    fn test_parse_returns_present_null() {
        let response = json!({"data": {"test": {"ok": true, "test_data": null}}});
        assert_eq!(single("test_data").parse(&response).unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_rejected_with_message() {
        let response = json!({"data": {"test": {"ok": false, "error": "test_error", "test_data": "x"}}});
        let err = single("test_data").parse(&response).unwrap_err();
        assert!(matches!(&err, ApiError::Rejected { message } if message == "test_error"));
        assert_eq!(err.to_string(), "test_error");
    }

    #[test]
    fn test_parse_rejected_without_message() {
        let response = json!({"data": {"test": {"ok": false, "error": null}}});
        let err = single("test_data").parse(&response).unwrap_err();
        assert_eq!(err.to_string(), "Invalid API response");
    }

    #[test]
    fn test_parse_empty_response_is_rejected() {
        let err = single("test_data").parse(&json!({})).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert_eq!(err.to_string(), "Invalid API response");
    }

    #[test]
    fn test_parse_null_data_is_rejected() {
        let response = json!({"data": null, "errors": [{"message": "syntax"}]});
        let err = single("test_data").parse(&response).unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
    }

    #[test]
    fn test_parse_ok_without_key_is_parse_error() {
        let response = json!({"data": {"test": {"ok": true}}});
        let err = single("test_data").parse(&response).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Parse(ParseError::MissingKey { ref key }) if key == "test_data"
        ));
    }

    #[test]
    fn test_parse_multiple_keys_preserves_order() {
        let query = Query::new("test", "", Map::new(), ResultKey::Multiple(&["b", "a"]));
        let response = json!({"data": {"test": {"ok": true, "a": 1, "b": null, "c": 3}}});

        let result = query.parse(&response).unwrap();
        let keys: Vec<&String> = result.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(result["a"], 1);
        assert_eq!(result["b"], Value::Null);
    }

    #[test]
    fn test_parse_multiple_keys_reports_first_missing() {
        let query = Query::new("test", "", Map::new(), ResultKey::Multiple(&["a", "b", "c"]));
        let response = json!({"data": {"test": {"ok": true, "a": 1}}});

        let err = query.parse(&response).unwrap_err();
        assert_eq!(err.to_string(), "Key b not found in response");
    }

    #[test]
    fn test_parse_non_string_error_is_stringified() {
        let response = json!({"data": {"test": {"ok": false, "error": {"code": 7}}}});
        let err = single("k").parse(&response).unwrap_err();
        assert_eq!(err.to_string(), r#"{"code":7}"#);
    }
}
