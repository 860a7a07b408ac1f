//! Accounts query.

use super::{Operation, ResultKey};

/// The `accountsN` query listing ELS groups and standalone LSPU accounts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accounts;

impl Operation for Accounts {
    const OPERATION_NAME: &'static str = "accountsN";
    const DOCUMENT: &'static str = include_str!("documents/accounts.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Single("accounts");
}
