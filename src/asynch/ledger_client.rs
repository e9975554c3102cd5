//! Typed JSON-RPC operations over the XRPL wire (spec.md §4.6), exposed as
//! owned DTOs so the Escrow Manager and Transaction Coordinator never touch
//! a borrowed response or a raw `serde_json::Value` field.
//!
//! Grounded on the teacher's `asynch::clients::json_rpc` request-building
//! convention (rename the request's `command` field to `method`, wrap the
//! body in a one-element `params` array) and its monotonic request-id
//! allocator idiom, generalized here to an `AtomicU64` counter so a single
//! `LedgerClient` can be shared across the Coordinator's worker pool.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{CoreError, CoreResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide JSON-RPC transport + typed XRPL operations (C4 + C6).
/// Cheap to clone: `reqwest::Client` is itself a pooled, `Arc`-backed
/// handle, matching the teacher's "one process-wide HTTP client with
/// connection reuse" requirement (spec.md §4.4).
#[derive(Clone)]
pub struct LedgerClient {
    http: HttpClient,
    network_url: String,
    faucet_url: String,
    next_id: std::sync::Arc<AtomicU64>,
}

#[derive(Debug, Clone)]
pub struct AccountData {
    pub balance_drops: u64,
    pub sequence: u32,
    pub owner_count: u32,
    pub flags: u32,
}

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    pub engine_result: String,
    pub engine_result_message: String,
    pub tx_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TxStatus {
    pub validated: bool,
    pub ledger_index: Option<u32>,
    pub transaction_result: Option<String>,
}

#[derive(Debug, Clone)]
pub struct TxSummary {
    pub hash: String,
    pub ledger_index: u32,
    pub validated: bool,
    pub transaction_type: Option<String>,
    pub sequence: Option<u32>,
    pub transaction_result: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerInfoSummary {
    pub build_version: String,
    pub complete_ledgers: String,
    pub validated_ledger_index: Option<u32>,
}

impl LedgerClient {
    pub fn new(network_url: impl Into<String>, faucet_url: impl Into<String>) -> Self {
        LedgerClient {
            http: HttpClient::new(),
            network_url: network_url.into(),
            faucet_url: faucet_url.into(),
            next_id: std::sync::Arc::new(AtomicU64::new(1)),
        }
    }

    fn allocate_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// POST a JSON-RPC 2.0 request and return its `result` field, mapping
    /// non-2xx responses to `CoreError::TransportError` and a present
    /// `error` field to `CoreError::ProtocolError` (spec.md §4.4).
    async fn call(&self, method: &str, params: Value) -> CoreResult<Value> {
        let id = self.allocate_id();
        let body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": [params],
            "id": id,
        });

        let response = self
            .http
            .post(&self.network_url)
            .timeout(REQUEST_TIMEOUT)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(CoreError::TransportError {
                status: Some(status.as_u16()),
                body: text,
            });
        }

        let envelope: Value = serde_json::from_str(&text)?;
        let result = envelope
            .get("result")
            .cloned()
            .unwrap_or(Value::Null);

        if let Some(error) = result.get("error").and_then(Value::as_str) {
            let message = result
                .get("error_message")
                .and_then(Value::as_str)
                .unwrap_or(error)
                .to_string();
            let code = result.get("error_code").and_then(Value::as_i64).map(|c| c as i32);
            return Err(CoreError::ProtocolError {
                code,
                message,
            });
        }

        Ok(result)
    }

    pub async fn account_info(&self, address: &str) -> CoreResult<AccountData> {
        let result = self
            .call(
                "account_info",
                json!({ "account": address, "ledger_index": "validated" }),
            )
            .await?;

        #[derive(Deserialize)]
        struct AccountDataWire {
            #[serde(rename = "Balance")]
            balance: String,
            #[serde(rename = "Sequence")]
            sequence: u32,
            #[serde(rename = "OwnerCount")]
            owner_count: u32,
            #[serde(rename = "Flags")]
            flags: u32,
        }
        #[derive(Deserialize)]
        struct AccountInfoWire {
            account_data: AccountDataWire,
        }

        let wire: AccountInfoWire = serde_json::from_value(result)
            .map_err(|e| CoreError::ProtocolError {
                code: None,
                message: e.to_string(),
            })?;
        let balance_drops = wire.account_data.balance.parse::<u64>().map_err(|_| {
            CoreError::ProtocolError {
                code: None,
                message: "non-numeric Balance in account_info response".into(),
            }
        })?;

        Ok(AccountData {
            balance_drops,
            sequence: wire.account_data.sequence,
            owner_count: wire.account_data.owner_count,
            flags: wire.account_data.flags,
        })
    }

    /// Current ledger index; `last_ledger_sequence = current + 4` per
    /// spec.md §4.6.
    pub async fn current_ledger_index(&self) -> CoreResult<u32> {
        let result = self
            .call("ledger", json!({ "ledger_index": "validated" }))
            .await?;
        result
            .get("ledger_index")
            .and_then(Value::as_u64)
            .map(|v| v as u32)
            .ok_or_else(|| CoreError::ProtocolError {
                code: None,
                message: "missing ledger_index in ledger response".into(),
            })
    }

    pub async fn submit(&self, tx_blob: &str) -> CoreResult<SubmitOutcome> {
        let result = self.call("submit", json!({ "tx_blob": tx_blob })).await?;

        let engine_result = result
            .get("engine_result")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let engine_result_message = result
            .get("engine_result_message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let tx_hash = result
            .get("tx_json")
            .and_then(|v| v.get("hash"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(SubmitOutcome {
            engine_result,
            engine_result_message,
            tx_hash,
        })
    }

    /// `txnNotFound` is treated as a retryable soft failure per spec.md
    /// §4.6: callers see `validated: false` rather than a hard error.
    pub async fn tx(&self, hash: &str) -> CoreResult<TxStatus> {
        match self.call("tx", json!({ "transaction": hash })).await {
            Ok(result) => {
                let validated = result
                    .get("validated")
                    .and_then(Value::as_bool)
                    .unwrap_or(false);
                let ledger_index = result
                    .get("ledger_index")
                    .and_then(Value::as_u64)
                    .map(|v| v as u32);
                let transaction_result = result
                    .get("meta")
                    .and_then(|m| m.get("TransactionResult"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Ok(TxStatus {
                    validated,
                    ledger_index,
                    transaction_result,
                })
            }
            Err(CoreError::ProtocolError { message, .. }) if message.contains("txnNotFound") => {
                Ok(TxStatus {
                    validated: false,
                    ledger_index: None,
                    transaction_result: None,
                })
            }
            Err(other) => Err(other),
        }
    }

    /// Used by the Escrow Manager to derive `OfferSequence` from the
    /// owner's `EscrowCreate` transaction rather than guessing (spec.md §9
    /// Open Question 3) and to build escrow history views.
    pub async fn account_tx(&self, address: &str, limit: u16) -> CoreResult<Vec<TxSummary>> {
        let result = self
            .call(
                "account_tx",
                json!({ "account": address, "limit": limit }),
            )
            .await?;

        let transactions = result
            .get("transactions")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        Ok(transactions
            .iter()
            .filter_map(|entry| {
                let hash = entry.get("hash")?.as_str()?.to_string();
                let ledger_index = entry.get("ledger_index")?.as_u64()? as u32;
                let validated = entry.get("validated").and_then(Value::as_bool).unwrap_or(false);
                let tx_json = entry.get("tx_json");
                let transaction_type = tx_json
                    .and_then(|t| t.get("TransactionType"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                let sequence = tx_json
                    .and_then(|t| t.get("Sequence"))
                    .and_then(Value::as_u64)
                    .map(|v| v as u32);
                let transaction_result = entry
                    .get("meta")
                    .and_then(|m| m.get("TransactionResult"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Some(TxSummary {
                    hash,
                    ledger_index,
                    validated,
                    transaction_type,
                    sequence,
                    transaction_result,
                })
            })
            .collect())
    }

    /// Raw `tx_json`/`meta` entries from `account_tx`, unsummarized. The
    /// Escrow Manager's read-side views need fields `account_tx` (the typed
    /// [`LedgerClient::account_tx`] wrapper) doesn't carry -- `Owner`,
    /// `OfferSequence`, `Amount`, `Destination`, `Condition` -- to
    /// cross-reference an escrow's original `EscrowCreate` sequence with its
    /// resolving `EscrowFinish`/`EscrowCancel` (spec.md §9 Open Question 3).
    pub async fn account_tx_raw(&self, address: &str, limit: u16) -> CoreResult<Vec<Value>> {
        let result = self
            .call("account_tx", json!({ "account": address, "limit": limit }))
            .await?;
        Ok(result
            .get("transactions")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Raw ledger objects owned by `address`, optionally filtered to a
    /// single `LedgerEntryType` (e.g. `"escrow"`). Used by the Escrow
    /// Manager's read-side views (spec.md §4.7: "built from account_info,
    /// account_tx, and parsed escrow ledger objects") since no typed
    /// `account_objects` wrapper is named in spec.md §4.6's operation list.
    pub async fn account_objects(
        &self,
        address: &str,
        ledger_entry_type: Option<&str>,
    ) -> CoreResult<Vec<Value>> {
        let mut params = json!({ "account": address, "ledger_index": "validated" });
        if let Some(entry_type) = ledger_entry_type {
            params["type"] = Value::String(entry_type.to_string());
        }
        let result = self.call("account_objects", params).await?;
        Ok(result
            .get("account_objects")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    pub async fn ping(&self) -> CoreResult<()> {
        self.call("ping", json!({})).await.map(|_| ())
    }

    pub async fn server_info(&self) -> CoreResult<ServerInfoSummary> {
        let result = self.call("server_info", json!({})).await?;
        let info = result.get("info").cloned().unwrap_or(Value::Null);
        Ok(ServerInfoSummary {
            build_version: info
                .get("build_version")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            complete_ledgers: info
                .get("complete_ledgers")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
            validated_ledger_index: info
                .get("validated_ledger")
                .and_then(|l| l.get("seq"))
                .and_then(Value::as_u64)
                .map(|v| v as u32),
        })
    }

    /// POST to the faucet endpoint for testnet funding (spec.md §4.6/§6).
    pub async fn fund(&self, destination: &str) -> CoreResult<()> {
        let response = self
            .http
            .post(&self.faucet_url)
            .timeout(REQUEST_TIMEOUT)
            .json(&json!({ "destination": destination }))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(CoreError::TransportError {
                status: Some(status.as_u16()),
                body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_monotonic_request_ids() {
        let client = LedgerClient::new("https://example.invalid", "https://example.invalid/fund");
        let a = client.allocate_id();
        let b = client.allocate_id();
        assert!(b > a);
    }
}
