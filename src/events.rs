//! Fire-and-forget domain event publication to the external event bus
//! (spec.md §4.9).
//!
//! Grounded on the pack's Redis pub/sub usage for an analogous
//! escrow-settlement event role; the Core never awaits acknowledgement
//! from the bus, matching spec.md's "Delivery is at-least-once from the
//! bus's perspective; the Core does not await acknowledgement."

use std::string::{String, ToString};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Domain event types emitted across the Core's lifecycle (spec.md §4.9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum EventType {
    #[strum(serialize = "enterprise.registered")]
    EnterpriseRegistered,
    #[strum(serialize = "wallet.created")]
    WalletCreated,
    #[strum(serialize = "wallet.activated")]
    WalletActivated,
    #[strum(serialize = "smart_cheque.created")]
    SmartChequeCreated,
    #[strum(serialize = "milestone.completed")]
    MilestoneCompleted,
    #[strum(serialize = "payment.released")]
    PaymentReleased,
    #[strum(serialize = "escrow.canceled")]
    EscrowCanceled,
    #[strum(serialize = "dispute.created")]
    DisputeCreated,
}

/// `{event_id, event_type, occurred_at, payload}` per spec.md §4.9.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub event_id: String,
    pub event_type: String,
    pub occurred_at: u64,
    pub payload: Value,
}

impl Event {
    pub fn new(event_id: String, event_type: EventType, payload: Value) -> Self {
        Event {
            event_id,
            event_type: event_type.to_string(),
            occurred_at: now_unix_seconds(),
            payload,
        }
    }
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Publishes `Event`s to a named channel. `publish` never returns an error
/// the caller is expected to act on: per spec.md §4.9 the Core does not
/// await acknowledgement, so implementations log-and-drop on failure
/// rather than propagate.
#[async_trait]
pub trait EventBus: Send + Sync {
    async fn publish(&self, channel: &str, event: Event);
}

/// In-memory bus used by unit tests for the Coordinator/Escrow Manager so
/// they can be exercised without a live Redis instance.
#[derive(Default)]
pub struct NullEventBus {
    published: std::sync::Mutex<std::vec::Vec<(String, Event)>>,
}

impl NullEventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> std::vec::Vec<(String, Event)> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventBus for NullEventBus {
    async fn publish(&self, channel: &str, event: Event) {
        self.published
            .lock()
            .unwrap()
            .push((channel.to_string(), event));
    }
}

/// Redis-backed event bus (spec.md §4.9 "external bus"). `PUBLISH`es the
/// JSON-encoded event to the named channel; connection failures are
/// logged and swallowed rather than surfaced, matching the at-least-once,
/// no-ack contract.
pub struct RedisEventBus {
    client: redis::Client,
}

impl RedisEventBus {
    pub fn new(redis_url: &str) -> redis::RedisResult<Self> {
        Ok(RedisEventBus {
            client: redis::Client::open(redis_url)?,
        })
    }
}

#[async_trait]
impl EventBus for RedisEventBus {
    async fn publish(&self, channel: &str, event: Event) {
        let payload = match serde_json::to_string(&event) {
            Ok(payload) => payload,
            Err(error) => {
                warn!(?error, event_type = %event.event_type, "failed to serialize event");
                return;
            }
        };

        match self.client.get_multiplexed_async_connection().await {
            Ok(mut conn) => {
                use redis::AsyncCommands;
                if let Err(error) = conn.publish::<_, _, ()>(channel, payload).await {
                    warn!(?error, channel, "failed to publish event to redis");
                }
            }
            Err(error) => {
                warn!(?error, channel, "failed to connect to redis for event publish");
            }
        }
    }
}
