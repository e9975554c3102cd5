//! Escrow Manager (C7): milestone-gated `EscrowCreate`/`EscrowFinish`/
//! `EscrowCancel` orchestration, condition binding, and the read-only views
//! over escrow state (spec.md §4.7).
//!
//! Every write operation hands its transaction to the Transaction
//! Coordinator (C8) rather than submitting directly -- this is the cycle
//! spec.md §9 describes ("the cycle is broken by the event bus"): the
//! Escrow Manager never holds a callback into the Coordinator, it just
//! enqueues and polls the Coordinator's own transaction store for the
//! terminal state.

pub mod model;
pub mod monitor;

pub use model::{EscrowHistoryEntry, EscrowSnapshot, MilestoneCondition, TransactionOutcome};
pub use monitor::monitor_escrow_status;

use std::string::{String, ToString};
use std::sync::Arc;
use std::time::Duration;
use std::vec::Vec;

use async_trait::async_trait;
use serde_json::Value;
use tracing::warn;

use crate::asynch::ledger_client::{AccountData, LedgerClient};
use crate::coordinator::{Coordinator, TransactionPriority, TransactionStatus};
use crate::core::conditions::{Condition, Fulfillment, PREIMAGE_LENGTH};
use crate::error::{CoreError, CoreResult};
use crate::monitoring::{EscrowHealth, EscrowHealthSnapshot, EscrowStatus, Monitoring};
use crate::utils::time_conversion::RIPPLE_EPOCH;
use crate::wallet::Wallet;

/// `FinishAfter` offset from escrow creation (spec.md §8 scenario E2: the
/// reference scenario uses `now+3600`).
pub const DEFAULT_FINISH_AFTER_DELTA_SECS: u32 = 3600;
/// `CancelAfter` offset from escrow creation (spec.md §8 scenario E2:
/// `now+7200`).
pub const DEFAULT_CANCEL_AFTER_DELTA_SECS: u32 = 7200;

const AWAIT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Ledger reads the Escrow Manager needs beyond what the Coordinator's
/// submission-focused [`crate::coordinator::LedgerApi`] exposes. Abstracted
/// behind a trait for the same reason as that one: tests drive the read
/// side against a fake without a live rippled (spec.md §9 Design Note 2).
#[async_trait]
pub trait EscrowLedgerApi: Send + Sync {
    async fn account_info(&self, address: &str) -> CoreResult<AccountData>;
    async fn account_tx_raw(&self, address: &str, limit: u16) -> CoreResult<Vec<Value>>;
}

#[async_trait]
impl EscrowLedgerApi for LedgerClient {
    async fn account_info(&self, address: &str) -> CoreResult<AccountData> {
        LedgerClient::account_info(self, address).await
    }

    async fn account_tx_raw(&self, address: &str, limit: u16) -> CoreResult<Vec<Value>> {
        LedgerClient::account_tx_raw(self, address, limit).await
    }
}

/// Current time as XRPL Ripple-epoch seconds (glossary: "Ripple epoch").
fn ripple_epoch_now() -> u32 {
    let unix = crate::coordinator::now_unix_seconds() as i64;
    (unix - RIPPLE_EPOCH).max(0) as u32
}

pub struct EscrowManager {
    ledger: Arc<dyn EscrowLedgerApi>,
    coordinator: Arc<Coordinator>,
    monitoring: Arc<Monitoring>,
}

impl EscrowManager {
    pub fn new(
        ledger: Arc<dyn EscrowLedgerApi>,
        coordinator: Arc<Coordinator>,
        monitoring: Arc<Monitoring>,
    ) -> Arc<Self> {
        Arc::new(EscrowManager {
            ledger,
            coordinator,
            monitoring,
        })
    }

    /// `CreateSmartChequeEscrow` (spec.md §4.7): derive the condition from
    /// `milestone_secret`, construct and submit `EscrowCreate`, and return
    /// the transaction's terminal outcome alongside the fulfillment hex.
    /// The fulfillment is returned to the caller and never persisted by the
    /// Core (spec.md §4.7: "NEVER persisted by the Core").
    pub async fn create_smart_cheque_escrow(
        &self,
        payer: Arc<Wallet>,
        payee: String,
        amount_drops: u64,
        currency: String,
        milestone_secret: [u8; PREIMAGE_LENGTH],
    ) -> CoreResult<(TransactionOutcome, String)> {
        if currency != "XRP" {
            return Err(CoreError::InvalidInput(
                "non-XRP currencies are out of scope for signed escrow paths".to_string(),
            ));
        }

        let fulfillment = Fulfillment::from_preimage(milestone_secret);
        let condition = fulfillment.condition();

        let now = ripple_epoch_now();
        let finish_after = now.saturating_add(DEFAULT_FINISH_AFTER_DELTA_SECS);
        let cancel_after = now.saturating_add(DEFAULT_CANCEL_AFTER_DELTA_SECS);

        let tx_id = self.coordinator.enqueue_escrow_create(
            payer,
            payee,
            amount_drops,
            condition.to_hex().to_string(),
            finish_after,
            cancel_after,
            TransactionPriority::Normal,
        )?;

        let outcome = self.await_terminal(&tx_id).await;
        Ok((outcome, fulfillment.to_hex().to_string()))
    }

    /// `CompleteMilestone` (spec.md §4.7): build and submit `EscrowFinish`.
    /// Self-checks the fulfillment against the supplied condition before
    /// ever reaching the wire -- the ledger would reject a mismatch with
    /// `tecCRYPTOCONDITION_ERROR`, but failing fast here keeps that failure
    /// out of the Coordinator's retry/backoff path entirely (it is not a
    /// transient fault).
    pub async fn complete_milestone(
        &self,
        payee: Arc<Wallet>,
        owner: String,
        offer_sequence: u32,
        condition_hex: String,
        fulfillment_hex: String,
    ) -> CoreResult<TransactionOutcome> {
        let fulfillment = Fulfillment::from_hex(&fulfillment_hex)?;
        let derived = fulfillment.condition();
        if !derived.to_hex().eq_ignore_ascii_case(&condition_hex) {
            return Err(CoreError::InvalidInput(
                "fulfillment does not satisfy the supplied condition".to_string(),
            ));
        }

        let tx_id = self.coordinator.enqueue_escrow_finish(
            payee,
            owner,
            offer_sequence,
            condition_hex,
            fulfillment_hex,
            TransactionPriority::High,
        );
        Ok(self.await_terminal(&tx_id).await)
    }

    /// `CancelEscrow` (spec.md §4.7): permitted only after `CancelAfter`.
    /// Pre-checked locally against the mirrored snapshot when one is
    /// available, so an obviously-premature cancel never reaches the wire;
    /// the ledger remains the authority (`tecNO_PERMISSION` if this check
    /// is stale).
    pub async fn cancel_escrow(
        &self,
        canceller: Arc<Wallet>,
        owner: String,
        offer_sequence: u32,
    ) -> CoreResult<TransactionOutcome> {
        if let Some(snapshot) = self.lookup_escrow(&owner, offer_sequence).await? {
            if let Some(cancel_after) = snapshot.cancel_after_epoch {
                if ripple_epoch_now() < cancel_after {
                    return Err(CoreError::InvalidInput(
                        "escrow cannot be canceled before cancel_after".to_string(),
                    ));
                }
            }
        }

        let tx_id = self.coordinator.enqueue_escrow_cancel(
            canceller,
            owner,
            offer_sequence,
            TransactionPriority::Normal,
        );
        Ok(self.await_terminal(&tx_id).await)
    }

    /// `LookupEscrow` (spec.md §4.7): reconstruct the escrow's mirrored
    /// state by finding its `EscrowCreate` in `account_tx` and checking
    /// whether a later `EscrowFinish`/`EscrowCancel` resolved it.
    pub async fn lookup_escrow(
        &self,
        owner: &str,
        offer_sequence: u32,
    ) -> CoreResult<Option<EscrowSnapshot>> {
        let entries = self.ledger.account_tx_raw(owner, 200).await?;
        self.monitoring.touch_wallet(owner);

        let mut snapshot = entries
            .iter()
            .find_map(|entry| model::parse_escrow_create(entry, offer_sequence));

        if let Some(snap) = snapshot.as_mut() {
            for entry in &entries {
                if let Some(status) = model::parse_escrow_resolution(entry, owner, offer_sequence) {
                    snap.status = status;
                    break;
                }
            }
        }

        Ok(snapshot)
    }

    /// `GetMultipleEscrows` (spec.md §4.7): every escrow `owner` has ever
    /// created, each annotated with whatever resolution (if any) was found
    /// in the same `account_tx` page.
    pub async fn get_multiple_escrows(&self, owner: &str) -> CoreResult<Vec<EscrowSnapshot>> {
        let entries = self.ledger.account_tx_raw(owner, 200).await?;

        let mut snapshots = Vec::new();
        for entry in &entries {
            let tx_json = match entry.get("tx_json").or_else(|| entry.get("tx")) {
                Some(v) => v,
                None => continue,
            };
            if tx_json.get("TransactionType").and_then(Value::as_str) != Some("EscrowCreate") {
                continue;
            }
            let sequence = match tx_json.get("Sequence").and_then(Value::as_u64) {
                Some(s) => s as u32,
                None => continue,
            };
            if let Some(snapshot) = model::parse_escrow_create(entry, sequence) {
                snapshots.push(snapshot);
            }
        }

        for snapshot in snapshots.iter_mut() {
            for entry in &entries {
                if let Some(status) =
                    model::parse_escrow_resolution(entry, owner, snapshot.sequence)
                {
                    snapshot.status = status;
                    break;
                }
            }
        }

        Ok(snapshots)
    }

    /// `GetEscrowHistory` (spec.md §4.7): every `EscrowCreate`/`EscrowFinish`/
    /// `EscrowCancel` the owner's `account_tx` page contains, in ledger
    /// order.
    pub async fn get_escrow_history(
        &self,
        owner: &str,
        limit: u16,
    ) -> CoreResult<Vec<EscrowHistoryEntry>> {
        let entries = self.ledger.account_tx_raw(owner, limit).await?;
        Ok(entries
            .iter()
            .filter_map(|entry| {
                let tx_json = entry.get("tx_json").or_else(|| entry.get("tx"))?;
                let transaction_type = tx_json.get("TransactionType")?.as_str()?.to_string();
                if !matches!(
                    transaction_type.as_str(),
                    "EscrowCreate" | "EscrowFinish" | "EscrowCancel"
                ) {
                    return None;
                }
                let tx_hash = entry.get("hash")?.as_str()?.to_string();
                let sequence = tx_json
                    .get("Sequence")
                    .and_then(Value::as_u64)
                    .or_else(|| tx_json.get("OfferSequence").and_then(Value::as_u64))
                    .map(|v| v as u32);
                let validated = entry.get("validated").and_then(Value::as_bool).unwrap_or(false);
                let transaction_result = entry
                    .get("meta")
                    .and_then(|m| m.get("TransactionResult"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Some(EscrowHistoryEntry {
                    tx_hash,
                    transaction_type,
                    sequence,
                    validated,
                    transaction_result,
                })
            })
            .collect())
    }

    /// `VerifyEscrowBalance` (spec.md §4.7): whether an active escrow's
    /// mirrored amount matches what the caller expects to have escrowed.
    pub async fn verify_escrow_balance(
        &self,
        owner: &str,
        offer_sequence: u32,
        expected_amount_drops: u64,
    ) -> CoreResult<bool> {
        match self.lookup_escrow(owner, offer_sequence).await? {
            Some(snapshot) if snapshot.status == EscrowStatus::Active => {
                Ok(snapshot.amount_drops == expected_amount_drops)
            }
            _ => Ok(false),
        }
    }

    /// `GetEscrowHealthStatus` (spec.md §4.7/§4.10): a point-in-time
    /// traffic-light snapshot, also recorded onto [`Monitoring`] for
    /// operator visibility.
    pub async fn get_escrow_health_status(
        &self,
        owner: &str,
        offer_sequence: u32,
    ) -> CoreResult<EscrowHealthSnapshot> {
        let escrow_id = model::escrow_id(owner, offer_sequence);
        let snapshot = self.lookup_escrow(owner, offer_sequence).await?;

        let result = match snapshot {
            None => EscrowHealthSnapshot {
                escrow_id,
                status: EscrowStatus::Expired,
                health: EscrowHealth::Red,
                message: "no EscrowCreate found for this owner/sequence".to_string(),
            },
            Some(snap) if snap.status != EscrowStatus::Active => EscrowHealthSnapshot {
                escrow_id,
                status: snap.status,
                health: EscrowHealth::Green,
                message: std::format!("resolved: {}", snap.status),
            },
            Some(snap) => {
                let (health, message) = model::health_for_snapshot(&snap, ripple_epoch_now() as i64);
                EscrowHealthSnapshot {
                    escrow_id,
                    status: EscrowStatus::Active,
                    health,
                    message,
                }
            }
        };

        self.monitoring.record_escrow_health(result.clone());
        Ok(result)
    }

    /// Poll the Coordinator's transaction store until `tx_id` reaches a
    /// terminal status, or a generous deadline (the Coordinator's own
    /// straggler timeout plus slack) elapses -- at which point the
    /// transaction's current, possibly non-terminal, status is returned
    /// rather than blocking the caller forever.
    async fn await_terminal(&self, tx_id: &str) -> TransactionOutcome {
        let budget = Duration::from_secs(self.coordinator.config().batch_timeout_secs + 60);
        let deadline = tokio::time::Instant::now() + budget;

        loop {
            match self.coordinator.store().get(tx_id) {
                Some(tx) => {
                    if matches!(
                        tx.status,
                        TransactionStatus::Confirmed
                            | TransactionStatus::Failed
                            | TransactionStatus::Expired
                    ) || tokio::time::Instant::now() >= deadline
                    {
                        return TransactionOutcome::from_transaction(&tx);
                    }
                }
                None => {
                    warn!(tx_id, "transaction vanished from the coordinator's store");
                    return TransactionOutcome {
                        transaction_id: tx_id.to_string(),
                        status: TransactionStatus::Failed,
                        tx_hash: None,
                        confirmed_ledger_index: None,
                        last_error: Some("transaction not found in store".to_string()),
                    };
                }
            }
            tokio::time::sleep(AWAIT_POLL_INTERVAL).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::coordinator::{Coordinator, LedgerApi};
    use crate::events::NullEventBus;
    use serde_json::json;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct FakeLedger {
        sequence: AtomicU32,
        submit_result: String,
        account_tx: std::sync::Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl LedgerApi for FakeLedger {
        async fn account_info(&self, _address: &str) -> CoreResult<AccountData> {
            Ok(AccountData {
                balance_drops: 1_000_000_000,
                sequence: self.sequence.fetch_add(1, Ordering::SeqCst),
                owner_count: 0,
                flags: 0,
            })
        }

        async fn current_ledger_index(&self) -> CoreResult<u32> {
            Ok(1000)
        }

        async fn submit(
            &self,
            _tx_blob: &str,
        ) -> CoreResult<crate::asynch::ledger_client::SubmitOutcome> {
            Ok(crate::asynch::ledger_client::SubmitOutcome {
                engine_result: self.submit_result.clone(),
                engine_result_message: String::new(),
                tx_hash: Some("ABCDEF0123456789".to_string()),
            })
        }

        async fn tx(&self, _hash: &str) -> CoreResult<crate::asynch::ledger_client::TxStatus> {
            Ok(crate::asynch::ledger_client::TxStatus {
                validated: true,
                ledger_index: Some(1001),
                transaction_result: Some("tesSUCCESS".to_string()),
            })
        }
    }

    #[async_trait]
    impl EscrowLedgerApi for FakeLedger {
        async fn account_info(&self, address: &str) -> CoreResult<AccountData> {
            LedgerApi::account_info(self, address).await
        }

        async fn account_tx_raw(&self, _address: &str, _limit: u16) -> CoreResult<Vec<Value>> {
            Ok(self.account_tx.lock().unwrap().clone())
        }
    }

    /// Batch windows shrunk to a couple of seconds so a lone transaction's
    /// straggler path closes quickly instead of waiting out the real
    /// `batch_timeout_secs`/`max_wait_time_secs` defaults (five whole
    /// minutes). `Coordinator::expires_at` derives its window from these
    /// same two fields, so they can't collapse to zero without the
    /// transaction expiring before `process_once` ever looks at it.
    fn fast_batching_config() -> Config {
        Config {
            max_wait_time_secs: 2,
            batch_timeout_secs: 2,
            ..Config::default()
        }
    }

    fn manager(submit_result: &str, account_tx: Vec<Value>) -> (Arc<EscrowManager>, Arc<Coordinator>) {
        let ledger = Arc::new(FakeLedger {
            sequence: AtomicU32::new(1),
            submit_result: submit_result.to_string(),
            account_tx: std::sync::Mutex::new(account_tx),
        });
        let coordinator = Coordinator::new(
            fast_batching_config(),
            ledger.clone(),
            Arc::new(NullEventBus::new()),
            Arc::new(Monitoring::new()),
        );
        let manager = EscrowManager::new(ledger, coordinator.clone(), Arc::new(Monitoring::new()));
        (manager, coordinator)
    }

    fn wallet() -> Arc<Wallet> {
        Arc::new(Wallet::create(Some(crate::constants::CryptoAlgorithm::ED25519)).unwrap())
    }

    /// Drives `coordinator.process_once()` on a tight tick in the
    /// background, standing in for [`Coordinator::run`] so a test can
    /// `await` a manager operation without spawning a full engine loop.
    fn spawn_driver(coordinator: Arc<Coordinator>) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                coordinator.process_once().await;
                tokio::time::sleep(Duration::from_millis(20)).await;
            }
        })
    }

    #[tokio::test]
    async fn create_smart_cheque_escrow_returns_a_fulfillment_that_satisfies_its_condition() {
        let (manager, coordinator) = manager("tesSUCCESS", Vec::new());
        let driver = spawn_driver(coordinator);

        let payer = wallet();
        let milestone_secret = crate::core::conditions::generate_preimage();
        let (outcome, fulfillment_hex) = manager
            .create_smart_cheque_escrow(
                payer,
                "rPayee111111111111111111111".to_string(),
                200_000,
                "XRP".to_string(),
                milestone_secret,
            )
            .await
            .unwrap();
        driver.abort();

        let fulfillment = Fulfillment::from_hex(&fulfillment_hex).unwrap();
        let condition = Condition::from_preimage(&milestone_secret);
        assert_eq!(fulfillment.condition().to_hex(), condition.to_hex());
        assert_eq!(outcome.status, TransactionStatus::Confirmed);
    }

    #[tokio::test]
    async fn non_xrp_currency_is_rejected_before_touching_the_coordinator() {
        let (manager, _coordinator) = manager("tesSUCCESS", Vec::new());
        let payer = wallet();
        let milestone_secret = crate::core::conditions::generate_preimage();
        let result = manager
            .create_smart_cheque_escrow(
                payer,
                "rPayee111111111111111111111".to_string(),
                200_000,
                "USD".to_string(),
                milestone_secret,
            )
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn complete_milestone_rejects_a_fulfillment_that_does_not_match_the_condition() {
        let (manager, _coordinator) = manager("tesSUCCESS", Vec::new());
        let payee = wallet();
        let real_preimage = crate::core::conditions::generate_preimage();
        let wrong_preimage = crate::core::conditions::generate_preimage();
        let condition = Condition::from_preimage(&real_preimage);
        let wrong_fulfillment = Fulfillment::from_preimage(wrong_preimage);

        let result = manager
            .complete_milestone(
                payee,
                "rOwner11111111111111111111".to_string(),
                3,
                condition.to_hex().to_string(),
                wrong_fulfillment.to_hex().to_string(),
            )
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn lookup_escrow_finds_its_creation_and_resolution_in_account_tx() {
        let entries = std::vec![
            json!({
                "hash": "HASH1",
                "validated": true,
                "meta": {"TransactionResult": "tesSUCCESS"},
                "tx_json": {
                    "TransactionType": "EscrowCreate",
                    "Account": "rOwner11111111111111111111",
                    "Destination": "rDest1111111111111111111111",
                    "Amount": "200000",
                    "Condition": "A0258020AA",
                    "FinishAfter": 700000000u64,
                    "CancelAfter": 700003600u64,
                    "Sequence": 5,
                    "Flags": 0,
                }
            }),
            json!({
                "hash": "HASH2",
                "validated": true,
                "meta": {"TransactionResult": "tesSUCCESS"},
                "tx_json": {
                    "TransactionType": "EscrowFinish",
                    "Owner": "rOwner11111111111111111111",
                    "OfferSequence": 5,
                }
            }),
        ];
        let (manager, _coordinator) = manager("tesSUCCESS", entries);

        let snapshot = manager
            .lookup_escrow("rOwner11111111111111111111", 5)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.amount_drops, 200000);
        assert_eq!(snapshot.status, EscrowStatus::Completed);
    }

    #[tokio::test]
    async fn cancel_before_cancel_after_is_rejected_locally() {
        let entries = std::vec![json!({
            "hash": "HASH1",
            "validated": true,
            "meta": {"TransactionResult": "tesSUCCESS"},
            "tx_json": {
                "TransactionType": "EscrowCreate",
                "Account": "rOwner11111111111111111111",
                "Destination": "rDest1111111111111111111111",
                "Amount": "200000",
                "Sequence": 9,
                "Flags": 0,
                "CancelAfter": 4_102_444_800u64,
                "FinishAfter": 4_102_441_200u64,
            }
        })];
        let (manager, _coordinator) = manager("tesSUCCESS", entries);
        let canceller = wallet();
        let result = manager
            .cancel_escrow(canceller, "rOwner11111111111111111111".to_string(), 9)
            .await;
        assert!(matches!(result, Err(CoreError::InvalidInput(_))));
    }
}
