//! Transaction Coordinator (C8): lifecycle state machine, per-account
//! sequencing, batching, retry/backoff, and a fixed-size worker pool
//! draining the queue (spec.md §4.8/§5).
//!
//! Grounded on the teacher's `asynch::transaction::{autofill, sign,
//! submit}` recipe for the prepare -> sign -> submit pipeline; the
//! Coordinator wraps that pipeline in the pending/queued/batching/
//! processing/confirmed/failed/expired state machine described in
//! spec.md and owns retry/backoff instead of calling it once and
//! returning.

pub mod batching;
pub mod model;
pub mod retry;
pub mod signing;

pub use model::{
    now_unix_seconds, BatchStatus, InMemoryTransactionStore, Transaction, TransactionBatch,
    TransactionPriority, TransactionStatus, TransactionStore, TransactionType, TxPayload,
};

use std::string::{String, ToString};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use std::time::Duration;
use std::vec::Vec;

use async_trait::async_trait;
use dashmap::DashMap;
use tokio::sync::{Mutex as AsyncMutex, Semaphore};
use tracing::{info, warn};

use crate::asynch::ledger_client::{AccountData, LedgerClient, SubmitOutcome, TxStatus};
use crate::config::Config;
use crate::error::{CoreError, CoreResult};
use crate::events::{Event, EventBus, EventType};
use crate::models::amount::XRPAmount;
use crate::models::transactions::escrow_cancel::EscrowCancel;
use crate::models::transactions::escrow_create::EscrowCreate;
use crate::models::transactions::escrow_finish::EscrowFinish;
use crate::models::transactions::payment::Payment;
use crate::models::transactions::Transaction as XrplTransaction;
use crate::monitoring::Monitoring;
use crate::wallet::Wallet;

/// The subset of the Ledger Client (C6) the Coordinator's submission
/// pipeline needs. Abstracted behind a trait so tests can drive the full
/// state machine against a fake implementation instead of the network
/// (spec.md §9 Design Note 2: "a fake `AsyncClient` implementation that
/// still executes the real state machine").
#[async_trait]
pub trait LedgerApi: Send + Sync {
    async fn account_info(&self, address: &str) -> CoreResult<AccountData>;
    async fn current_ledger_index(&self) -> CoreResult<u32>;
    async fn submit(&self, tx_blob: &str) -> CoreResult<SubmitOutcome>;
    async fn tx(&self, hash: &str) -> CoreResult<TxStatus>;
}

#[async_trait]
impl LedgerApi for LedgerClient {
    async fn account_info(&self, address: &str) -> CoreResult<AccountData> {
        LedgerClient::account_info(self, address).await
    }

    async fn current_ledger_index(&self) -> CoreResult<u32> {
        LedgerClient::current_ledger_index(self).await
    }

    async fn submit(&self, tx_blob: &str) -> CoreResult<SubmitOutcome> {
        LedgerClient::submit(self, tx_blob).await
    }

    async fn tx(&self, hash: &str) -> CoreResult<TxStatus> {
        LedgerClient::tx(self, hash).await
    }
}

/// How many times `poll_for_validation` checks `tx()` before giving up and
/// deciding the transaction expired (spec.md §4.8 "Validation polling").
const VALIDATION_POLL_ATTEMPTS: u8 = 10;
const VALIDATION_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Process-wide engine state: the transaction store, ledger client, event
/// bus, monitoring, per-account submission mutexes, and the worker
/// concurrency cap (spec.md §5: "process-wide singletons initialized at
/// startup and released at shutdown").
pub struct Coordinator {
    config: Config,
    store: Arc<dyn TransactionStore>,
    ledger: Arc<dyn LedgerApi>,
    events: Arc<dyn EventBus>,
    monitoring: Arc<Monitoring>,
    account_locks: DashMap<String, Arc<AsyncMutex<()>>>,
    wallets: DashMap<String, Arc<Wallet>>,
    workers: Arc<Semaphore>,
    next_id: AtomicU64,
    /// Lets `&self` methods obtain an owned, `'static` handle to spawn
    /// background tasks (retry timers, per-transaction submission) without
    /// every caller threading an `Arc<Coordinator>` through the API.
    self_handle: Weak<Coordinator>,
}

impl Coordinator {
    pub fn new(
        config: Config,
        ledger: Arc<dyn LedgerApi>,
        events: Arc<dyn EventBus>,
        monitoring: Arc<Monitoring>,
    ) -> Arc<Self> {
        Self::build(
            config,
            ledger,
            events,
            monitoring,
            Arc::new(InMemoryTransactionStore::new()),
        )
    }

    /// Construct with a durable store (spec.md §3 "Persisted state") in
    /// place of the default in-memory one.
    pub fn with_store(
        config: Config,
        ledger: Arc<dyn LedgerApi>,
        events: Arc<dyn EventBus>,
        monitoring: Arc<Monitoring>,
        store: Arc<dyn TransactionStore>,
    ) -> Arc<Self> {
        Self::build(config, ledger, events, monitoring, store)
    }

    fn build(
        config: Config,
        ledger: Arc<dyn LedgerApi>,
        events: Arc<dyn EventBus>,
        monitoring: Arc<Monitoring>,
        store: Arc<dyn TransactionStore>,
    ) -> Arc<Self> {
        let workers = Arc::new(Semaphore::new(config.worker_pool_size));
        Arc::new_cyclic(|weak| Coordinator {
            config,
            store,
            ledger,
            events,
            monitoring,
            account_locks: DashMap::new(),
            wallets: DashMap::new(),
            workers,
            next_id: AtomicU64::new(1),
            self_handle: weak.clone(),
        })
    }

    /// An owned handle to this Coordinator, for moving into a spawned task.
    fn handle(&self) -> Arc<Coordinator> {
        self.self_handle
            .upgrade()
            .expect("coordinator dropped while in use")
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn TransactionStore> {
        &self.store
    }

    pub fn monitoring(&self) -> &Arc<Monitoring> {
        &self.monitoring
    }

    /// Registers a signing wallet so transactions from its address can be
    /// enqueued by reference rather than by value (spec.md §3: the Core
    /// "consumes addresses and private material by reference").
    pub fn register_wallet(&self, wallet: Wallet) -> Arc<Wallet> {
        let handle = Arc::new(wallet);
        self.wallets
            .insert(handle.classic_address.clone(), handle.clone());
        self.monitoring.touch_wallet(&handle.classic_address);
        handle
    }

    fn account_lock(&self, address: &str) -> Arc<AsyncMutex<()>> {
        self.account_locks
            .entry(address.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    fn allocate_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::Relaxed);
        std::format!("{prefix}-{n}")
    }

    fn expires_at(&self) -> u64 {
        now_unix_seconds() + self.config.batch_timeout_secs.max(self.config.max_wait_time_secs) * 4
    }

    /// Enqueue a `Payment` (spec.md §3/§4.8). Transitions straight from
    /// `pending` to `queued`: nothing here blocks on I/O, so there is no
    /// observable `pending` window before the batching pass picks it up.
    pub fn enqueue_payment(
        &self,
        wallet: Arc<Wallet>,
        to: String,
        amount_drops: u64,
        currency: String,
        priority: TransactionPriority,
    ) -> String {
        let payload = TxPayload::Payment(Payment::new(
            wallet.classic_address.clone().into(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            XRPAmount::from(std::borrow::Cow::Owned(amount_drops.to_string())).into(),
            to.clone().into(),
            None,
            None,
            None,
            None,
            None,
        ));
        self.enqueue(
            TransactionType::Payment,
            priority,
            wallet,
            Some(to),
            amount_drops,
            currency,
            payload,
        )
    }

    /// Enqueue a wallet-provisioning funding transfer. Represented on the
    /// wire as a `Payment` but tagged `tx_type=wallet_setup` so it carries
    /// the wallet-setup fee and is excluded from batching (spec.md §3/§4.8:
    /// "A transaction with type=wallet_setup is never batched").
    pub fn enqueue_wallet_setup(
        &self,
        wallet: Arc<Wallet>,
        to: String,
        amount_drops: u64,
    ) -> String {
        let payload = TxPayload::Payment(Payment::new(
            wallet.classic_address.clone().into(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            XRPAmount::from(std::borrow::Cow::Owned(amount_drops.to_string())).into(),
            to.clone().into(),
            None,
            None,
            None,
            None,
            None,
        ));
        self.enqueue(
            TransactionType::WalletSetup,
            TransactionPriority::High,
            wallet,
            Some(to),
            amount_drops,
            "XRP".to_string(),
            payload,
        )
    }

    /// Enqueue an `EscrowCreate` (spec.md §4.7 `CreateSmartChequeEscrow`).
    #[allow(clippy::too_many_arguments)]
    pub fn enqueue_escrow_create(
        &self,
        wallet: Arc<Wallet>,
        destination: String,
        amount_drops: u64,
        condition_hex: String,
        finish_after_epoch: u32,
        cancel_after_epoch: u32,
        priority: TransactionPriority,
    ) -> CoreResult<String> {
        if cancel_after_epoch <= finish_after_epoch {
            return Err(CoreError::InvalidInput(
                "cancel_after must be greater than finish_after".to_string(),
            ));
        }
        let payload = TxPayload::EscrowCreate(EscrowCreate::new(
            wallet.classic_address.clone().into(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            XRPAmount::from(std::borrow::Cow::Owned(amount_drops.to_string())),
            destination.clone().into(),
            Some(cancel_after_epoch),
            Some(condition_hex.into()),
            None,
            Some(finish_after_epoch),
        ));
        Ok(self.enqueue(
            TransactionType::EscrowCreate,
            priority,
            wallet,
            Some(destination),
            amount_drops,
            "XRP".to_string(),
            payload,
        ))
    }

    /// Enqueue an `EscrowFinish` (spec.md §4.7 `CompleteMilestone`).
    #[allow(clippy::too_many_arguments)]
    pub fn enqueue_escrow_finish(
        &self,
        wallet: Arc<Wallet>,
        owner: String,
        offer_sequence: u32,
        condition_hex: String,
        fulfillment_hex: String,
        priority: TransactionPriority,
    ) -> String {
        let payload = TxPayload::EscrowFinish(EscrowFinish::new(
            wallet.classic_address.clone().into(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            owner.clone().into(),
            offer_sequence,
            Some(condition_hex.into()),
            Some(fulfillment_hex.into()),
        ));
        self.enqueue(
            TransactionType::EscrowFinish,
            priority,
            wallet,
            Some(owner),
            0,
            "XRP".to_string(),
            payload,
        )
    }

    /// Enqueue an `EscrowCancel` (spec.md §4.7 `CancelEscrow`).
    pub fn enqueue_escrow_cancel(
        &self,
        wallet: Arc<Wallet>,
        owner: String,
        offer_sequence: u32,
        priority: TransactionPriority,
    ) -> String {
        let payload = TxPayload::EscrowCancel(EscrowCancel::new(
            wallet.classic_address.clone().into(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            None,
            owner.clone().into(),
            offer_sequence,
        ));
        self.enqueue(
            TransactionType::EscrowCancel,
            priority,
            wallet,
            Some(owner),
            0,
            "XRP".to_string(),
            payload,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn enqueue(
        &self,
        tx_type: TransactionType,
        priority: TransactionPriority,
        wallet: Arc<Wallet>,
        to: Option<String>,
        amount_drops: u64,
        currency: String,
        payload: TxPayload,
    ) -> String {
        let id = self.allocate_id(&tx_type.to_string());
        let now = now_unix_seconds();
        let fee_drops = retry::default_fee_drops(tx_type);
        let transaction = Transaction {
            id: id.clone(),
            tx_type,
            priority,
            status: TransactionStatus::Queued,
            from: wallet.classic_address.clone(),
            to,
            amount_drops,
            currency,
            fee_drops,
            sequence: None,
            last_ledger_sequence: None,
            retry_count: 0,
            max_retries: self.config.submit_retry_max,
            expires_at: self.expires_at(),
            last_error: None,
            submitted_tx_hash: None,
            confirmed_at: None,
            confirmed_ledger_index: None,
            metadata: std::collections::HashMap::new(),
            payload,
            wallet,
            created_at: now,
            queued_at: Some(now),
        };
        self.monitoring.touch_wallet(&transaction.from);
        self.store.insert(transaction);
        id
    }

    /// One batching + submission sweep (spec.md §4.8). Intended to be
    /// called on a fixed tick by [`Coordinator::run`]; exposed separately
    /// so tests can drive exactly one sweep deterministically.
    pub async fn process_once(&self) {
        let now = now_unix_seconds();
        let batchable = self.store.list_batchable(now);
        let batches = batching::form_batches(&batchable, now, &self.config);

        for (mut batch, transaction_ids) in batches {
            batch.status = BatchStatus::Processing;
            batch.processed_at = Some(now);
            for id in &transaction_ids {
                if let Some(mut tx) = self.store.get(id) {
                    tx.status = TransactionStatus::Batching;
                    self.store.replace(tx);
                }
            }

            let mut handles = Vec::with_capacity(transaction_ids.len());
            for id in transaction_ids {
                let coordinator = self.handle();
                handles.push(tokio::spawn(async move {
                    coordinator.submit_one(&id).await
                }));
            }
            let mut success = 0usize;
            let mut failure = 0usize;
            for handle in handles {
                match handle.await {
                    Ok(Ok(())) => success += 1,
                    _ => failure += 1,
                }
            }
            batch.success_count = success;
            batch.failure_count = failure;
            batch.status = BatchStatus::Completed;
            batch.completed_at = Some(now_unix_seconds());
            info!(
                batch_id = %batch.id,
                success,
                failure,
                "batch completed"
            );
        }
    }

    /// Background driver: ticks [`Coordinator::process_once`] every second
    /// until `shutdown` fires (spec.md §5: "Shutdown ... drains in-flight
    /// submissions (bounded wait), and returns").
    pub async fn run(&self, mut shutdown: tokio::sync::watch::Receiver<bool>) {
        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    self.process_once().await;
                }
                _ = shutdown.changed() => {
                    if *shutdown.borrow() {
                        info!("coordinator shutting down");
                        break;
                    }
                }
            }
        }
    }

    /// Acquire a worker slot, acquire the per-account submission mutex,
    /// autofill, sign, submit. This is the only place sequence numbers are
    /// allocated, so per-account ordering holds by construction (spec.md
    /// §5, §8 invariant 3).
    async fn submit_one(&self, id: &str) -> CoreResult<()> {
        let _permit = self.workers.acquire().await.map_err(|_| {
            CoreError::Internal("worker semaphore closed".to_string())
        })?;

        let mut tx = self
            .store
            .get(id)
            .ok_or_else(|| CoreError::Internal(std::format!("unknown transaction {id}")))?;

        if tx.is_expired(now_unix_seconds()) {
            return self.mark_expired(tx).await;
        }

        let account = tx.from.clone();
        let lock = self.account_lock(&account);
        let _account_guard = lock.lock().await;

        tx.status = TransactionStatus::Processing;
        self.store.replace(tx.clone());

        match self.autofill_sign_submit(&mut tx).await {
            Ok(outcome) => self.handle_submit_outcome(tx, outcome).await,
            Err(error) if error.is_retryable() => self.schedule_retry(tx, error).await,
            Err(error) => self.mark_failed(tx, error).await,
        }
    }

    async fn autofill_sign_submit(&self, tx: &mut Transaction) -> CoreResult<SubmitOutcome> {
        let account_data = self.ledger.account_info(&tx.from).await?;
        let current_ledger = self.ledger.current_ledger_index().await?;
        tx.sequence = Some(account_data.sequence);
        tx.last_ledger_sequence = Some(current_ledger + 4);

        let tx_blob = match &mut tx.payload {
            TxPayload::Payment(payment) => {
                let common = payment.get_mut_common_fields();
                common.sequence = tx.sequence;
                common.last_ledger_sequence = tx.last_ledger_sequence;
                common.fee = Some(XRPAmount::from(std::borrow::Cow::Owned(tx.fee_drops.to_string())));
                signing::sign_and_encode(payment, &tx.wallet)?.0
            }
            TxPayload::EscrowCreate(escrow_create) => {
                let common = escrow_create.get_mut_common_fields();
                common.sequence = tx.sequence;
                common.last_ledger_sequence = tx.last_ledger_sequence;
                common.fee = Some(XRPAmount::from(std::borrow::Cow::Owned(tx.fee_drops.to_string())));
                signing::sign_and_encode(escrow_create, &tx.wallet)?.0
            }
            TxPayload::EscrowFinish(escrow_finish) => {
                let common = escrow_finish.get_mut_common_fields();
                common.sequence = tx.sequence;
                common.last_ledger_sequence = tx.last_ledger_sequence;
                common.fee = Some(XRPAmount::from(std::borrow::Cow::Owned(tx.fee_drops.to_string())));
                signing::sign_and_encode(escrow_finish, &tx.wallet)?.0
            }
            TxPayload::EscrowCancel(escrow_cancel) => {
                let common = escrow_cancel.get_mut_common_fields();
                common.sequence = tx.sequence;
                common.last_ledger_sequence = tx.last_ledger_sequence;
                common.fee = Some(XRPAmount::from(std::borrow::Cow::Owned(tx.fee_drops.to_string())));
                signing::sign_and_encode(escrow_cancel, &tx.wallet)?.0
            }
        };

        self.monitoring.record_submitted(tx.tx_type, tx.priority);
        self.ledger.submit(&tx_blob).await
    }

    async fn handle_submit_outcome(
        &self,
        mut tx: Transaction,
        outcome: SubmitOutcome,
    ) -> CoreResult<()> {
        if outcome.engine_result == "tesSUCCESS" {
            tx.status = TransactionStatus::Processing;
            tx.submitted_tx_hash = outcome.tx_hash.clone();
            self.store.replace(tx.clone());

            let hash = outcome.tx_hash.unwrap_or_default();
            self.poll_for_validation(tx, hash).await
        } else {
            let error = CoreError::from_engine_result(
                &outcome.engine_result,
                &outcome.engine_result_message,
            );
            if error.is_retryable() {
                self.schedule_retry(tx, error).await
            } else {
                self.mark_failed(tx, error).await
            }
        }
    }

    /// Poll `tx(hash)` until validated or the attempt budget is spent
    /// (spec.md §4.8 "Validation polling"). Expiry is detected by the
    /// ledger moving past `last_ledger_sequence` without a validated
    /// result -- spec.md §7 `Expired`.
    async fn poll_for_validation(
        &self,
        mut tx: Transaction,
        hash: String,
    ) -> CoreResult<()> {
        for _ in 0..VALIDATION_POLL_ATTEMPTS {
            tokio::time::sleep(VALIDATION_POLL_INTERVAL).await;
            let status = self.ledger.tx(&hash).await?;
            if status.validated {
                tx.status = TransactionStatus::Confirmed;
                tx.confirmed_at = Some(now_unix_seconds());
                tx.confirmed_ledger_index = status.ledger_index;
                if let Some(result) = status.transaction_result {
                    tx.metadata
                        .insert("transaction_result".to_string(), result.into());
                }
                self.store.replace(tx.clone());
                self.monitoring.record_confirmed();
                self.emit_confirmation_event(&tx).await;
                return Ok(());
            }

            let current = self.ledger.current_ledger_index().await.unwrap_or(0);
            if let Some(lls) = tx.last_ledger_sequence {
                if current > lls {
                    return self.mark_expired(tx).await;
                }
            }
        }

        self.mark_expired(tx).await
    }

    async fn emit_confirmation_event(&self, tx: &Transaction) {
        let (event_type, channel) = match tx.tx_type {
            TransactionType::EscrowFinish => (EventType::PaymentReleased, "payment.released"),
            TransactionType::EscrowCreate => {
                (EventType::SmartChequeCreated, "smart_cheque.created")
            }
            TransactionType::EscrowCancel => (EventType::EscrowCanceled, "escrow.canceled"),
            TransactionType::WalletSetup => (EventType::WalletActivated, "wallet.activated"),
            TransactionType::Payment => (EventType::PaymentReleased, "payment.released"),
        };
        self.events
            .publish(
                channel,
                Event::new(
                    tx.id.clone(),
                    event_type,
                    serde_json::json!({
                        "transaction_id": tx.id,
                        "from": tx.from,
                        "to": tx.to,
                        "amount_drops": tx.amount_drops,
                        "tx_hash": tx.submitted_tx_hash,
                    }),
                ),
            )
            .await;
    }

    /// spec.md §4.8/§7: return to `pending` with `retry_count += 1`, or
    /// terminally fail once `max_retries` is reached (spec.md §8 invariant
    /// 4: "a failed transaction with retry_count = max_retries never
    /// re-enters pending").
    async fn schedule_retry(&self, mut tx: Transaction, error: CoreError) -> CoreResult<()> {
        tx.last_error = Some(error.to_string());
        if tx.retry_count >= tx.max_retries {
            return self.mark_failed(tx, error).await;
        }

        tx.retry_count += 1;
        tx.status = TransactionStatus::Pending;
        self.store.replace(tx.clone());

        let delay = retry::backoff_with_jitter(tx.retry_count, self.config.submit_retry_base_ms);
        let coordinator = self.handle();
        let id = tx.id.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(mut requeued) = coordinator.store.get(&id) {
                if requeued.status == TransactionStatus::Pending {
                    requeued.status = TransactionStatus::Queued;
                    requeued.queued_at = Some(now_unix_seconds());
                    coordinator.store.replace(requeued);
                }
            }
        });

        warn!(tx_id = %tx.id, retry_count = tx.retry_count, "transaction retry scheduled");
        Ok(())
    }

    async fn mark_failed(&self, mut tx: Transaction, error: CoreError) -> CoreResult<()> {
        tx.status = TransactionStatus::Failed;
        tx.last_error = Some(error.to_string());
        self.store.replace(tx.clone());
        self.monitoring.record_failed(&error.to_string());
        self.events
            .publish(
                "dispute.created",
                Event::new(
                    tx.id.clone(),
                    EventType::DisputeCreated,
                    serde_json::json!({
                        "transaction_id": tx.id,
                        "reason": error.to_string(),
                    }),
                ),
            )
            .await;
        Err(error)
    }

    async fn mark_expired(&self, mut tx: Transaction) -> CoreResult<()> {
        tx.status = TransactionStatus::Expired;
        let last_ledger_sequence = tx.last_ledger_sequence.unwrap_or(0);
        tx.last_error = Some(std::format!(
            "expired before validation (last_ledger_sequence={last_ledger_sequence})"
        ));
        self.store.replace(tx.clone());
        self.monitoring.record_failed("expired");
        Err(CoreError::Expired {
            last_ledger_sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::NullEventBus;
    use std::sync::atomic::AtomicU32;

    struct FakeLedger {
        sequence: AtomicU32,
        submit_result: String,
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

        async fn submit(&self, _tx_blob: &str) -> CoreResult<SubmitOutcome> {
            Ok(SubmitOutcome {
                engine_result: self.submit_result.clone(),
                engine_result_message: "".to_string(),
                tx_hash: Some("ABCDEF0123456789".to_string()),
            })
        }

        async fn tx(&self, _hash: &str) -> CoreResult<TxStatus> {
            Ok(TxStatus {
                validated: true,
                ledger_index: Some(1001),
                transaction_result: Some("tesSUCCESS".to_string()),
            })
        }
    }

    fn coordinator(submit_result: &str) -> Arc<Coordinator> {
        Coordinator::new(
            Config::default(),
            Arc::new(FakeLedger {
                sequence: AtomicU32::new(1),
                submit_result: submit_result.to_string(),
            }),
            Arc::new(NullEventBus::new()),
            Arc::new(Monitoring::new()),
        )
    }

    /// A lone `critical` transaction waits out `batch_timeout_secs` like
    /// any other straggler (`batching::form_batches`'s 2+-member rule is
    /// what fast-tracks `critical`), so these tests enqueue a pair bound
    /// for the same destination to get an immediate batch close.
    fn enqueue_critical_pair(coordinator: &Arc<Coordinator>) -> (String, String) {
        let wallet = coordinator.register_wallet(
            Wallet::create(Some(crate::constants::CryptoAlgorithm::ED25519)).unwrap(),
        );
        let a = coordinator.enqueue_payment(
            wallet.clone(),
            "rDestinationAccount11111111".to_string(),
            100_000,
            "XRP".to_string(),
            TransactionPriority::Critical,
        );
        let b = coordinator.enqueue_payment(
            wallet,
            "rDestinationAccount11111111".to_string(),
            50_000,
            "XRP".to_string(),
            TransactionPriority::Critical,
        );
        (a, b)
    }

    #[tokio::test]
    async fn a_queued_payment_reaches_confirmed_on_success() {
        let coordinator = coordinator("tesSUCCESS");
        let (id, _sibling) = enqueue_critical_pair(&coordinator);

        coordinator.process_once().await;

        let tx = coordinator.store().get(&id).unwrap();
        assert_eq!(tx.status, TransactionStatus::Confirmed);
        assert!(tx.submitted_tx_hash.is_some());
    }

    #[tokio::test]
    async fn a_hard_ledger_rejection_marks_the_transaction_failed() {
        let coordinator = coordinator("tecCRYPTOCONDITION_ERROR");
        let (id, _sibling) = enqueue_critical_pair(&coordinator);

        coordinator.process_once().await;

        let tx = coordinator.store().get(&id).unwrap();
        assert_eq!(tx.status, TransactionStatus::Failed);
        assert_eq!(tx.retry_count, 0);
    }

    #[tokio::test]
    async fn a_soft_reject_re_enters_pending_with_an_incremented_retry_count() {
        let coordinator = coordinator("terQUEUED");
        let (id, _sibling) = enqueue_critical_pair(&coordinator);

        coordinator.process_once().await;

        let tx = coordinator.store().get(&id).unwrap();
        assert_eq!(tx.status, TransactionStatus::Pending);
        assert_eq!(tx.retry_count, 1);
        assert!(tx.retry_count <= tx.max_retries);
    }

    #[tokio::test]
    async fn wallet_setup_transactions_are_never_drawn_into_a_batch() {
        let coordinator = coordinator("tesSUCCESS");
        let wallet = coordinator.register_wallet(
            Wallet::create(Some(crate::constants::CryptoAlgorithm::ED25519)).unwrap(),
        );
        coordinator.enqueue_wallet_setup(wallet, "rDestinationAccount11111111".to_string(), 20_000_000);

        let batchable = coordinator.store().list_batchable(now_unix_seconds());
        assert!(batchable.is_empty());
    }
}
