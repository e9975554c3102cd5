//! Background escrow-status polling (spec.md §4.7 `MonitorEscrowStatus`).
//!
//! A live WS subscription would push these updates instead of polling, but
//! the Coordinator's WS client subscribes to ledger/transaction streams
//! (spec.md §4.5), not a per-escrow filter, so this rides the same poll
//! path [`super::EscrowManager::get_escrow_health_status`] already
//! exposes -- grounded on [`crate::coordinator::Coordinator::run`]'s
//! tick-or-shutdown `select!` shape.

use std::string::String;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use super::EscrowManager;
use crate::monitoring::{EscrowHealthSnapshot, EscrowStatus};

const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Poll `owner`'s escrow at `offer_sequence` every 5s, invoking `on_update`
/// with each health snapshot, until the escrow resolves or `shutdown`
/// fires.
pub async fn monitor_escrow_status(
    manager: Arc<EscrowManager>,
    owner: String,
    offer_sequence: u32,
    on_update: impl Fn(EscrowHealthSnapshot) + Send + Sync + 'static,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut interval = tokio::time::interval(POLL_INTERVAL);
    loop {
        tokio::select! {
            _ = interval.tick() => {
                match manager.get_escrow_health_status(&owner, offer_sequence).await {
                    Ok(snapshot) => {
                        let resolved = snapshot.status != EscrowStatus::Active;
                        on_update(snapshot);
                        if resolved {
                            info!(owner, offer_sequence, "escrow resolved, monitor exiting");
                            return;
                        }
                    }
                    Err(error) => {
                        warn!(owner, offer_sequence, %error, "escrow health lookup failed");
                    }
                }
            }
            _ = shutdown.changed() => {
                if *shutdown.borrow() {
                    info!(owner, offer_sequence, "escrow monitor canceled");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::coordinator::{Coordinator, LedgerApi};
    use crate::error::CoreResult;
    use crate::events::NullEventBus;
    use crate::monitoring::Monitoring;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    struct FakeLedger {
        account_tx: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl LedgerApi for FakeLedger {
        async fn account_info(
            &self,
            _address: &str,
        ) -> CoreResult<crate::asynch::ledger_client::AccountData> {
            Ok(crate::asynch::ledger_client::AccountData {
                balance_drops: 1,
                sequence: 1,
                owner_count: 0,
                flags: 0,
            })
        }

        async fn current_ledger_index(&self) -> CoreResult<u32> {
            Ok(1)
        }

        async fn submit(
            &self,
            _tx_blob: &str,
        ) -> CoreResult<crate::asynch::ledger_client::SubmitOutcome> {
            Ok(crate::asynch::ledger_client::SubmitOutcome {
                engine_result: "tesSUCCESS".to_string(),
                engine_result_message: String::new(),
                tx_hash: None,
            })
        }

        async fn tx(&self, _hash: &str) -> CoreResult<crate::asynch::ledger_client::TxStatus> {
            Ok(crate::asynch::ledger_client::TxStatus {
                validated: true,
                ledger_index: Some(1),
                transaction_result: Some("tesSUCCESS".to_string()),
            })
        }
    }

    #[async_trait]
    impl super::super::EscrowLedgerApi for FakeLedger {
        async fn account_info(
            &self,
            address: &str,
        ) -> CoreResult<crate::asynch::ledger_client::AccountData> {
            LedgerApi::account_info(self, address).await
        }

        async fn account_tx_raw(&self, _address: &str, _limit: u16) -> CoreResult<Vec<Value>> {
            Ok(self.account_tx.lock().unwrap().clone())
        }
    }

    fn escrow_create_entry(sequence: u64, cancel_after: u64) -> Value {
        json!({
            "hash": "HASH1",
            "validated": true,
            "meta": {"TransactionResult": "tesSUCCESS"},
            "tx_json": {
                "TransactionType": "EscrowCreate",
                "Account": "rOwner11111111111111111111",
                "Destination": "rDest1111111111111111111111",
                "Amount": "200000",
                "Sequence": sequence,
                "Flags": 0,
                "FinishAfter": cancel_after - 1,
                "CancelAfter": cancel_after,
            }
        })
    }

    #[tokio::test]
    async fn monitor_stops_as_soon_as_an_escrow_resolves() {
        let entries = std::vec![
            escrow_create_entry(5, 4_102_444_800),
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
        let ledger = Arc::new(FakeLedger {
            account_tx: Mutex::new(entries),
        });
        let coordinator = Coordinator::new(
            Config::default(),
            ledger.clone(),
            Arc::new(NullEventBus::new()),
            Arc::new(Monitoring::new()),
        );
        let manager = EscrowManager::new(ledger, coordinator, Arc::new(Monitoring::new()));

        let (_tx, rx) = watch::channel(false);
        let updates: Arc<Mutex<Vec<EscrowStatus>>> = Arc::new(Mutex::new(Vec::new()));
        let updates_clone = updates.clone();

        tokio::time::timeout(
            Duration::from_secs(7),
            monitor_escrow_status(
                manager,
                "rOwner11111111111111111111".to_string(),
                5,
                move |snapshot| updates_clone.lock().unwrap().push(snapshot.status),
                rx,
            ),
        )
        .await
        .expect("monitor should exit once the escrow resolves");

        assert_eq!(updates.lock().unwrap().last(), Some(&EscrowStatus::Completed));
    }
}
