//! Payments query.

use serde_json::{json, Map, Value};

use super::{Operation, ResultKey};

/// The `paymentsByLspu` query listing payments made to a provider account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payments {
    /// LSPU account id.
    pub lspu_id: i64,
}

impl Payments {
    /// Creates the query for the given LSPU id.
    #[must_use]
    pub const fn new(lspu_id: i64) -> Self {
        Self { lspu_id }
    }
}

impl Operation for Payments {
    const OPERATION_NAME: &'static str = "paymentsByLspu";
    const DOCUMENT: &'static str = include_str!("documents/payments.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Single("data");

    fn variables(&self) -> Map<String, Value> {
        let mut variables = Map::new();
        variables.insert("lspuId".to_string(), json!(self.lspu_id));
        variables
    }
}
