//! Read-side data shapes the Escrow Manager hands back to callers (spec.md
//! §3 `Escrow`/`MilestoneCondition`, §4.7).

use std::string::String;
use std::vec::Vec;

use serde_json::Value;

use crate::coordinator::{Transaction, TransactionStatus};
use crate::monitoring::{EscrowHealth, EscrowStatus};

/// Input to [`super::EscrowManager::create_smart_cheque_escrow`] describing
/// a milestone the escrow is conditioned on (spec.md §3).
#[derive(Debug, Clone)]
pub struct MilestoneCondition {
    pub milestone_id: String,
    pub verification_method: crate::core::conditions::VerificationMethod,
    pub oracle_config: Option<Value>,
    pub amount_drops: u64,
}

/// A mirrored view of an `Escrow` ledger object (spec.md §3), reconstructed
/// from `account_objects` plus the owner's original `EscrowCreate`
/// transaction (for the `sequence`/`OfferSequence` no ledger object field
/// carries directly).
#[derive(Debug, Clone, PartialEq)]
pub struct EscrowSnapshot {
    pub account: String,
    pub destination: String,
    pub amount_drops: u64,
    pub sequence: u32,
    pub condition: Option<String>,
    pub finish_after_epoch: Option<u32>,
    pub cancel_after_epoch: Option<u32>,
    pub flags: u32,
    pub status: EscrowStatus,
}

/// One entry in an escrow's resolution history (spec.md §4.7
/// `GetEscrowHistory`): the `EscrowCreate` plus whichever of
/// `EscrowFinish`/`EscrowCancel` resolved it, if any.
#[derive(Debug, Clone)]
pub struct EscrowHistoryEntry {
    pub tx_hash: String,
    pub transaction_type: String,
    pub sequence: Option<u32>,
    pub validated: bool,
    pub transaction_result: Option<String>,
}

/// The outcome of a Coordinator-submitted escrow transaction once it
/// reaches a terminal state (spec.md's "TransactionResult").
#[derive(Debug, Clone)]
pub struct TransactionOutcome {
    pub transaction_id: String,
    pub status: TransactionStatus,
    pub tx_hash: Option<String>,
    pub confirmed_ledger_index: Option<u32>,
    pub last_error: Option<String>,
}

impl TransactionOutcome {
    pub fn from_transaction(tx: &Transaction) -> Self {
        TransactionOutcome {
            transaction_id: tx.id.clone(),
            status: tx.status,
            tx_hash: tx.submitted_tx_hash.clone(),
            confirmed_ledger_index: tx.confirmed_ledger_index,
            last_error: tx.last_error.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == TransactionStatus::Confirmed
    }
}

/// Parse an `EscrowCreate` entry out of a raw `account_tx` transaction,
/// matching by `Sequence` (spec.md §9 Open Question 3: derive the owner's
/// creation sequence from transaction metadata rather than guessing).
pub(super) fn parse_escrow_create(entry: &Value, offer_sequence: u32) -> Option<EscrowSnapshot> {
    let tx_json = entry.get("tx_json").or_else(|| entry.get("tx"))?;
    if tx_json.get("TransactionType")?.as_str()? != "EscrowCreate" {
        return None;
    }
    if tx_json.get("Sequence")?.as_u64()? as u32 != offer_sequence {
        return None;
    }

    let account = tx_json.get("Account")?.as_str()?.to_string();
    let destination = tx_json.get("Destination")?.as_str()?.to_string();
    let amount_drops = tx_json.get("Amount")?.as_str()?.parse::<u64>().ok()?;
    let condition = tx_json
        .get("Condition")
        .and_then(Value::as_str)
        .map(str::to_string);
    let finish_after_epoch = tx_json.get("FinishAfter").and_then(Value::as_u64).map(|v| v as u32);
    let cancel_after_epoch = tx_json.get("CancelAfter").and_then(Value::as_u64).map(|v| v as u32);
    let flags = tx_json.get("Flags").and_then(Value::as_u64).unwrap_or(0) as u32;

    Some(EscrowSnapshot {
        account,
        destination,
        amount_drops,
        sequence: offer_sequence,
        condition,
        finish_after_epoch,
        cancel_after_epoch,
        flags,
        status: EscrowStatus::Active,
    })
}

/// Whether a raw `account_tx` entry is an `EscrowFinish`/`EscrowCancel` that
/// resolved the escrow created at `(owner, offer_sequence)`, and if so, how.
pub(super) fn parse_escrow_resolution(
    entry: &Value,
    owner: &str,
    offer_sequence: u32,
) -> Option<EscrowStatus> {
    let tx_json = entry.get("tx_json").or_else(|| entry.get("tx"))?;
    let transaction_type = tx_json.get("TransactionType")?.as_str()?;
    if transaction_type != "EscrowFinish" && transaction_type != "EscrowCancel" {
        return None;
    }
    if tx_json.get("Owner")?.as_str()? != owner {
        return None;
    }
    if tx_json.get("OfferSequence")?.as_u64()? as u32 != offer_sequence {
        return None;
    }
    let validated = entry.get("validated").and_then(Value::as_bool).unwrap_or(false);
    let succeeded = entry
        .get("meta")
        .and_then(|m| m.get("TransactionResult"))
        .and_then(Value::as_str)
        == Some("tesSUCCESS");
    if !validated || !succeeded {
        return None;
    }
    Some(if transaction_type == "EscrowFinish" {
        EscrowStatus::Completed
    } else {
        EscrowStatus::Canceled
    })
}

/// Traffic-light health for an active escrow based on how much of its
/// finish/cancel window has elapsed (spec.md §4.10 "Escrow health
/// snapshot").
pub(super) fn health_for_snapshot(snapshot: &EscrowSnapshot, now_ripple: i64) -> (EscrowHealth, String) {
    match (snapshot.finish_after_epoch, snapshot.cancel_after_epoch) {
        (Some(finish_after), Some(cancel_after)) => {
            if (now_ripple as i64) >= cancel_after as i64 {
                (
                    EscrowHealth::Red,
                    "past cancel_after without resolution".to_string(),
                )
            } else if (now_ripple as i64) >= finish_after as i64 {
                (EscrowHealth::Green, "finish window open".to_string())
            } else {
                let window = (cancel_after as i64 - finish_after as i64).max(1);
                let remaining = finish_after as i64 - now_ripple as i64;
                if remaining <= window / 5 {
                    (EscrowHealth::Yellow, "approaching finish window".to_string())
                } else {
                    (EscrowHealth::Green, "waiting for finish_after".to_string())
                }
            }
        }
        _ => (EscrowHealth::Green, "no timing constraints".to_string()),
    }
}

pub(super) fn escrow_id(account: &str, offer_sequence: u32) -> String {
    std::format!("{account}:{offer_sequence}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn escrow_create_entry(sequence: u64) -> Value {
        json!({
            "validated": true,
            "meta": {"TransactionResult": "tesSUCCESS"},
            "tx_json": {
                "TransactionType": "EscrowCreate",
                "Account": "rOwner1111111111111111111111",
                "Destination": "rDest111111111111111111111111",
                "Amount": "200000",
                "Condition": "A0258020AABBCC",
                "FinishAfter": 700000000u64,
                "CancelAfter": 700003600u64,
                "Sequence": sequence,
                "Flags": 0,
            }
        })
    }

    #[test]
    fn parses_escrow_create_matching_sequence() {
        let entry = escrow_create_entry(42);
        let snapshot = parse_escrow_create(&entry, 42).unwrap();
        assert_eq!(snapshot.amount_drops, 200000);
        assert_eq!(snapshot.sequence, 42);
        assert_eq!(snapshot.status, EscrowStatus::Active);
    }

    #[test]
    fn rejects_escrow_create_with_a_different_sequence() {
        let entry = escrow_create_entry(42);
        assert!(parse_escrow_create(&entry, 7).is_none());
    }

    #[test]
    fn parses_escrow_finish_resolution() {
        let entry = json!({
            "validated": true,
            "meta": {"TransactionResult": "tesSUCCESS"},
            "tx_json": {
                "TransactionType": "EscrowFinish",
                "Owner": "rOwner1111111111111111111111",
                "OfferSequence": 42,
            }
        });
        let status = parse_escrow_resolution(&entry, "rOwner1111111111111111111111", 42);
        assert_eq!(status, Some(EscrowStatus::Completed));
    }

    #[test]
    fn health_flags_red_once_past_cancel_after() {
        let snapshot = EscrowSnapshot {
            account: "rOwner".to_string(),
            destination: "rDest".to_string(),
            amount_drops: 1,
            sequence: 1,
            condition: None,
            finish_after_epoch: Some(100),
            cancel_after_epoch: Some(200),
            flags: 0,
            status: EscrowStatus::Active,
        };
        let (health, _) = health_for_snapshot(&snapshot, 250);
        assert_eq!(health, EscrowHealth::Red);
    }
}
