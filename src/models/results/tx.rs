use alloc::borrow::Cow;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tx<'a> {
    pub ctid: Cow<'a, str>,
    pub date: u32,
    pub hash: Cow<'a, str>,
    pub ledger_index: u32,
    pub meta: Value,
    /// Various fields of the transaction
    #[serde(flatten)]
    pub various: Value,
    pub validated: Option<bool>,
    /// (Deprecated) Alias for `ledger_index`
    #[serde(rename = "inLedger")]
    pub in_ledger: Option<u32>,
}
