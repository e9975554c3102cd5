//! Counters, gauges, and point-in-time snapshots for operator visibility
//! (spec.md §4.10).
//!
//! Grounded on the pack's escrow-settlement services' use of `prometheus`
//! for exactly this counter/gauge shape (submitted/confirmed/failed
//! totals, reconnect counters, lag gauges).

use std::collections::HashMap;
use std::string::{String, ToString};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use prometheus::{IntCounterVec, IntGauge, Opts, Registry};

use crate::coordinator::{TransactionPriority, TransactionType};

/// `EscrowHealth` traffic-light for `GetEscrowHealthStatus` (spec.md
/// §4.7/§4.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EscrowHealth {
    Green,
    Yellow,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum EscrowStatus {
    Active,
    Completed,
    Canceled,
    Expired,
}

#[derive(Debug, Clone)]
pub struct EscrowHealthSnapshot {
    pub escrow_id: String,
    pub status: EscrowStatus,
    pub health: EscrowHealth,
    pub message: String,
}

/// The metric registry and every counter/gauge the Core exposes. One
/// instance is created at `init` and shared across every component the
/// same way the Coordinator's HTTP/WS clients are process-wide
/// singletons (spec.md §5).
pub struct Monitoring {
    registry: Registry,
    tx_submitted_total: IntCounterVec,
    tx_confirmed_total: prometheus::IntCounter,
    tx_failed_total: IntCounterVec,
    ws_reconnects_total: prometheus::IntCounter,
    ledger_lag_seconds: IntGauge,
    wallet_last_seen: Mutex<HashMap<String, u64>>,
    escrow_health: Mutex<HashMap<String, EscrowHealthSnapshot>>,
}

impl Monitoring {
    pub fn new() -> Self {
        let registry = Registry::new();

        let tx_submitted_total = IntCounterVec::new(
            Opts::new("tx_submitted_total", "transactions submitted to the ledger"),
            &["type", "priority"],
        )
        .expect("valid metric");
        let tx_confirmed_total = prometheus::IntCounter::new(
            "tx_confirmed_total",
            "transactions that reached status=confirmed",
        )
        .expect("valid metric");
        let tx_failed_total = IntCounterVec::new(
            Opts::new("tx_failed_total", "transactions that reached status=failed"),
            &["reason"],
        )
        .expect("valid metric");
        let ws_reconnects_total = prometheus::IntCounter::new(
            "ws_reconnects_total",
            "websocket reconnect attempts since startup",
        )
        .expect("valid metric");
        let ledger_lag_seconds = IntGauge::new(
            "ledger_lag_seconds",
            "seconds between the latest observed ledger close and now",
        )
        .expect("valid metric");

        registry
            .register(Box::new(tx_submitted_total.clone()))
            .expect("register tx_submitted_total");
        registry
            .register(Box::new(tx_confirmed_total.clone()))
            .expect("register tx_confirmed_total");
        registry
            .register(Box::new(tx_failed_total.clone()))
            .expect("register tx_failed_total");
        registry
            .register(Box::new(ws_reconnects_total.clone()))
            .expect("register ws_reconnects_total");
        registry
            .register(Box::new(ledger_lag_seconds.clone()))
            .expect("register ledger_lag_seconds");

        Monitoring {
            registry,
            tx_submitted_total,
            tx_confirmed_total,
            tx_failed_total,
            ws_reconnects_total,
            ledger_lag_seconds,
            wallet_last_seen: Mutex::new(HashMap::new()),
            escrow_health: Mutex::new(HashMap::new()),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_submitted(&self, tx_type: TransactionType, priority: TransactionPriority) {
        self.tx_submitted_total
            .with_label_values(&[&tx_type.to_string(), &priority.to_string()])
            .inc();
    }

    pub fn record_confirmed(&self) {
        self.tx_confirmed_total.inc();
    }

    pub fn record_failed(&self, reason: &str) {
        self.tx_failed_total.with_label_values(&[reason]).inc();
    }

    pub fn record_ws_reconnect(&self) {
        self.ws_reconnects_total.inc();
    }

    pub fn set_ledger_lag_seconds(&self, lag: i64) {
        self.ledger_lag_seconds.set(lag);
    }

    /// Updated whenever any request references a wallet (spec.md §4.10).
    pub fn touch_wallet(&self, address: &str) {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        self.wallet_last_seen
            .lock()
            .unwrap()
            .insert(address.to_string(), now);
    }

    pub fn wallet_last_seen(&self, address: &str) -> Option<u64> {
        self.wallet_last_seen.lock().unwrap().get(address).copied()
    }

    pub fn record_escrow_health(&self, snapshot: EscrowHealthSnapshot) {
        self.escrow_health
            .lock()
            .unwrap()
            .insert(snapshot.escrow_id.clone(), snapshot);
    }

    pub fn escrow_health(&self, escrow_id: &str) -> Option<EscrowHealthSnapshot> {
        self.escrow_health.lock().unwrap().get(escrow_id).cloned()
    }
}

impl Default for Monitoring {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide monitoring singleton (spec.md §5: "process-wide
/// singletons initialized at startup").
pub static MONITORING: Lazy<Monitoring> = Lazy::new(Monitoring::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_submission_and_confirmation_counters() {
        let monitoring = Monitoring::new();
        monitoring.record_submitted(TransactionType::Payment, TransactionPriority::High);
        monitoring.record_confirmed();
        monitoring.record_failed("tecCRYPTOCONDITION_ERROR");

        let families = monitoring.registry().gather();
        assert!(!families.is_empty());
    }

    #[test]
    fn tracks_wallet_activity_timestamps() {
        let monitoring = Monitoring::new();
        assert!(monitoring.wallet_last_seen("rAddr").is_none());
        monitoring.touch_wallet("rAddr");
        assert!(monitoring.wallet_last_seen("rAddr").is_some());
    }

    #[test]
    fn records_escrow_health_snapshots() {
        let monitoring = Monitoring::new();
        monitoring.record_escrow_health(EscrowHealthSnapshot {
            escrow_id: "esc-1".to_string(),
            status: EscrowStatus::Active,
            health: EscrowHealth::Green,
            message: "on track".to_string(),
        });
        let snapshot = monitoring.escrow_health("esc-1").unwrap();
        assert_eq!(snapshot.health.to_string(), "green");
    }
}
