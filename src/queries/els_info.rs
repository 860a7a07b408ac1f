//! ELS (single personal account) details query.

use serde_json::{json, Map, Value};

use super::{Operation, ResultKey};

/// The `elsInfo` query for one ELS account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElsInfo {
    /// ELS account id.
    pub els_id: i64,
}

impl ElsInfo {
    /// Creates the query for the given ELS id.
    #[must_use]
    pub const fn new(els_id: i64) -> Self {
        Self { els_id }
    }
}

impl Operation for ElsInfo {
    const OPERATION_NAME: &'static str = "elsInfo";
    const DOCUMENT: &'static str = include_str!("documents/els_info.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Single("info");

    fn variables(&self) -> Map<String, Value> {
        let mut variables = Map::new();
        variables.insert("elsId".to_string(), json!(self.els_id));
        variables
    }
}
