//! LSPU (provider account) details query.

use serde_json::{json, Map, Value};

use super::{Operation, ResultKey};

/// The `lspuInfo` query for one provider account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LspuInfo {
    /// LSPU account id.
    pub lspu_id: i64,
}

impl LspuInfo {
    /// Creates the query for the given LSPU id.
    #[must_use]
    pub const fn new(lspu_id: i64) -> Self {
        Self { lspu_id }
    }
}

impl Operation for LspuInfo {
    const OPERATION_NAME: &'static str = "lspuInfo";
    const DOCUMENT: &'static str = include_str!("documents/lspu_info.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Single("info");

    fn variables(&self) -> Map<String, Value> {
        let mut variables = Map::new();
        variables.insert("lspuId".to_string(), json!(self.lspu_id));
        variables
    }
}
