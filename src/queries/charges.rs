//! Charges query.

use serde_json::{json, Map, Value};

use super::{Operation, ResultKey};

/// The `clientCharges` query listing accrued charges of a provider account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Charges {
    /// LSPU account id.
    pub lspu_id: i64,
}

impl Charges {
    /// Creates the query for the given LSPU id.
    #[must_use]
    pub const fn new(lspu_id: i64) -> Self {
        Self { lspu_id }
    }
}

impl Operation for Charges {
    const OPERATION_NAME: &'static str = "clientCharges";
    const DOCUMENT: &'static str = include_str!("documents/charges.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Single("data");

    fn variables(&self) -> Map<String, Value> {
        let mut variables = Map::new();
        variables.insert("lspuId".to_string(), json!(self.lspu_id));
        variables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charges_query() {
        let query = Charges::new(987).to_query();
        assert_eq!(query.operation_name(), "clientCharges");
        assert_eq!(query.variables()["lspuId"], 987);
        assert_eq!(
            query.to_json()["query"],
            include_str!("documents/charges.graphql")
        );
    }
}
