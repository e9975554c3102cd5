//! Transaction bookkeeping records, the batch shape, and the in-memory
//! persistence layer the engine drives (spec.md §3/§4.8).

use std::collections::HashMap;
use std::string::String;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use std::vec::Vec;

use dashmap::DashMap;
use serde_json::Value;
use strum_macros::Display;

use crate::models::transactions::escrow_cancel::EscrowCancel;
use crate::models::transactions::escrow_create::EscrowCreate;
use crate::models::transactions::escrow_finish::EscrowFinish;
use crate::models::transactions::payment::Payment;
use crate::wallet::Wallet;

/// Domain-level transaction kind (spec.md §3 `Transaction.type`). Distinct
/// from `models::transactions::TransactionType`, which names every wire
/// transaction the codec knows about; the Coordinator only ever handles
/// these five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TransactionType {
    Payment,
    EscrowCreate,
    EscrowFinish,
    EscrowCancel,
    WalletSetup,
}

/// Submission priority. Declaration order is ascending so `Critical` sorts
/// highest in the priority queue's max-heap ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TransactionPriority {
    Low,
    Normal,
    High,
    Critical,
}

/// Lifecycle state (spec.md §4.8 state machine).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TransactionStatus {
    Pending,
    Queued,
    Batching,
    Processing,
    Confirmed,
    Failed,
    Expired,
}

/// The concrete XRPL transaction the Coordinator signs and submits, owned
/// so it can sit in the in-memory store without lifetime threading back to
/// whatever built it.
#[derive(Debug, Clone)]
pub enum TxPayload {
    Payment(Payment<'static>),
    EscrowCreate(EscrowCreate<'static>),
    EscrowFinish(EscrowFinish<'static>),
    EscrowCancel(EscrowCancel<'static>),
}

/// The Coordinator's internal bookkeeping record (spec.md §3 `Transaction`).
///
/// Holds the signing `Wallet` by reference count rather than by value:
/// `Wallet` zeroizes its private key on drop and deliberately isn't
/// `Clone`, so every transaction from the same account shares one `Arc`
/// registered once via [`crate::coordinator::Coordinator::register_wallet`].
#[derive(Debug, Clone)]
pub struct Transaction {
    pub id: String,
    pub tx_type: TransactionType,
    pub priority: TransactionPriority,
    pub status: TransactionStatus,
    pub from: String,
    pub to: Option<String>,
    pub amount_drops: u64,
    pub currency: String,
    pub fee_drops: u64,
    pub sequence: Option<u32>,
    pub last_ledger_sequence: Option<u32>,
    pub retry_count: u8,
    pub max_retries: u8,
    pub expires_at: u64,
    pub last_error: Option<String>,
    pub submitted_tx_hash: Option<String>,
    pub confirmed_at: Option<u64>,
    pub confirmed_ledger_index: Option<u32>,
    pub metadata: HashMap<String, Value>,
    pub payload: TxPayload,
    pub wallet: Arc<Wallet>,
    pub created_at: u64,
    pub queued_at: Option<u64>,
}

impl Transaction {
    /// `(priority, currency, destination-bucket)` per spec.md §4.8 batching
    /// key. `wallet_setup` transactions never batch, so callers should check
    /// `tx_type` before grouping.
    pub fn batch_key(&self) -> (TransactionPriority, String, String) {
        (self.priority, self.currency.clone(), self.destination_bucket())
    }

    pub fn destination_bucket(&self) -> String {
        match &self.to {
            Some(to) if to.len() >= 8 => to[..8].to_string(),
            Some(to) => to.clone(),
            None => "none".to_string(),
        }
    }

    pub fn is_expired(&self, now: u64) -> bool {
        self.expires_at <= now
    }
}

pub fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Persistence seam for `Transaction` records (spec.md §3 ownership:
/// "the Transaction Coordinator exclusively owns Transaction and
/// TransactionBatch records"). Object-safe so a durable store can replace
/// [`InMemoryTransactionStore`] without touching the engine.
pub trait TransactionStore: Send + Sync {
    fn insert(&self, transaction: Transaction);
    fn get(&self, id: &str) -> Option<Transaction>;
    fn replace(&self, transaction: Transaction);
    fn list_by_status(&self, status: TransactionStatus) -> Vec<Transaction>;
    /// `status=queued AND type != wallet_setup AND not expired`, the pool
    /// batching draws from (spec.md §4.8).
    fn list_batchable(&self, now: u64) -> Vec<Transaction>;
}

/// `DashMap`-backed store; per-key locking gives the Coordinator concurrent
/// readers/writers without a single global mutex, matching the teacher's
/// per-account-mutex-over-one-big-lock preference elsewhere in the design.
#[derive(Default)]
pub struct InMemoryTransactionStore {
    transactions: DashMap<String, Transaction>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionStore for InMemoryTransactionStore {
    fn insert(&self, transaction: Transaction) {
        self.transactions.insert(transaction.id.clone(), transaction);
    }

    fn get(&self, id: &str) -> Option<Transaction> {
        self.transactions.get(id).map(|entry| entry.clone())
    }

    fn replace(&self, transaction: Transaction) {
        self.transactions.insert(transaction.id.clone(), transaction);
    }

    fn list_by_status(&self, status: TransactionStatus) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|entry| entry.status == status)
            .map(|entry| entry.clone())
            .collect()
    }

    fn list_batchable(&self, now: u64) -> Vec<Transaction> {
        self.transactions
            .iter()
            .filter(|entry| {
                entry.status == TransactionStatus::Queued
                    && entry.tx_type != TransactionType::WalletSetup
                    && !entry.is_expired(now)
            })
            .map(|entry| entry.clone())
            .collect()
    }
}

/// A group of transactions submitted together (spec.md §3/§4.8). The
/// Coordinator still signs and submits each member individually -- XRPL has
/// no native multi-transaction batch primitive on these transaction types --
/// but members of a batch are drained from the queue and handed to workers
/// as a unit, which is what "batching" buys: fewer queue-contention rounds
/// and priority-ordered fairness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum BatchStatus {
    Forming,
    Processing,
    Completed,
}

#[derive(Debug, Clone)]
pub struct TransactionBatch {
    pub id: String,
    pub priority: TransactionPriority,
    pub status: BatchStatus,
    pub currency: String,
    pub destination_bucket: String,
    pub transaction_count: usize,
    pub success_count: usize,
    pub failure_count: usize,
    pub transaction_ids: Vec<String>,
    pub formed_at: u64,
    pub processed_at: Option<u64>,
    pub completed_at: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, to: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            tx_type: TransactionType::Payment,
            priority: TransactionPriority::Normal,
            status: TransactionStatus::Queued,
            from: "rFrom".to_string(),
            to: Some(to.to_string()),
            amount_drops: 1000,
            currency: "XRP".to_string(),
            fee_drops: 12,
            sequence: None,
            last_ledger_sequence: None,
            retry_count: 0,
            max_retries: 3,
            expires_at: now_unix_seconds() + 3600,
            last_error: None,
            submitted_tx_hash: None,
            confirmed_at: None,
            confirmed_ledger_index: None,
            metadata: HashMap::new(),
            payload: TxPayload::Payment(Payment::new(
                "rFrom".into(),
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                crate::models::amount::XRPAmount::from("1000").into(),
                to.to_string().into(),
                None,
                None,
                None,
                None,
                None,
            )),
            wallet: Arc::new(test_wallet()),
            created_at: now_unix_seconds(),
            queued_at: Some(now_unix_seconds()),
        }
    }

    fn test_wallet() -> Wallet {
        Wallet::create(Some(crate::constants::CryptoAlgorithm::ED25519)).unwrap()
    }

    #[test]
    fn batch_key_groups_by_priority_currency_and_bucket() {
        let a = sample("a", "rAAAAAAAAOne");
        let b = sample("b", "rBBBBBBBBTwo");
        assert_ne!(a.batch_key(), b.batch_key());
    }

    #[test]
    fn in_memory_store_round_trips() {
        let store = InMemoryTransactionStore::new();
        store.insert(sample("tx-1", "rDest"));
        let loaded = store.get("tx-1").unwrap();
        assert_eq!(loaded.status, TransactionStatus::Queued);

        let listed = store.list_batchable(now_unix_seconds());
        assert_eq!(listed.len(), 1);
    }
}
