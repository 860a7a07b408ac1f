//! Monthly receipt query.

use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use super::{Operation, ResultKey};

/// The `receipt` query for one billing month.
///
/// The result is an object with the receipt `content` and its download `url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    /// Any day of the billing month; sent as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// E-mail address the receipt is associated with.
    pub email: String,
    /// ELS or LSPU account id.
    pub account_id: i64,
    /// Whether `account_id` is an ELS id.
    pub is_els: bool,
}

impl Receipt {
    /// Creates the query.
    #[must_use]
    pub fn new(date: NaiveDate, email: impl Into<String>, account_id: i64, is_els: bool) -> Self {
        Self {
            date,
            email: email.into(),
            account_id,
            is_els,
        }
    }
}

impl Operation for Receipt {
    const OPERATION_NAME: &'static str = "receipt";
    const DOCUMENT: &'static str = include_str!("documents/receipt.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Multiple(&["content", "url"]);

    fn variables(&self) -> Map<String, Value> {
        let mut variables = Map::new();
        variables.insert(
            "dateIsoShort".to_string(),
            json!(self.date.format("%Y-%m-%d").to_string()),
        );
        variables.insert("email".to_string(), json!(self.email));
        variables.insert("isEls".to_string(), json!(self.is_els));
        variables.insert("id".to_string(), json!(self.account_id));
        variables
    }
}
