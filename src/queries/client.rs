//! Client profile query.

use super::{Operation, ResultKey};

/// The `clientV2` query returning the signed-in client's profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClientInfo;

impl Operation for ClientInfo {
    const OPERATION_NAME: &'static str = "clientV2";
    const DOCUMENT: &'static str = include_str!("documents/client.graphql");
    const RESULT_KEY: ResultKey = ResultKey::Single("client");
}
