//! Multiplexed WebSocket subscription dispatch and reconnect (C5, spec.md
//! §4.5).
//!
//! Grounded on the teacher's `asynch::clients::websocket::tungstenite`
//! connect/send/receive recipe (`tokio_tungstenite::connect_async`,
//! `futures_util::{SinkExt, StreamExt}` over a split sink/stream) and its
//! `websocket_base`-style id-keyed dispatch table. The teacher's client
//! is built for one request in flight at a time, answered by the next
//! frame off the wire; this module generalizes that into a single
//! long-lived reader task that keeps dispatching frames for as long as the
//! process runs, fans `type ∈ {ledgerClosed, transaction,
//! validationReceived}` pushes out to every live subscription whose stream
//! set wants them (spec.md §4.5: "incoming frames are dispatched to the
//! waiting caller by id, or ... to every active subscription whose stream
//! set includes that type"), and reconnects with the backoff spec.md §4.5
//! prescribes, re-issuing every subscription that was live at the moment
//! of disconnect.

use std::collections::HashMap;
use std::string::{String, ToString};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;
use std::vec::Vec;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot, Mutex as AsyncMutex};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{info, warn};

use crate::error::{CoreError, CoreResult};
use crate::monitoring::Monitoring;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

/// Initial reconnect backoff (spec.md §4.5: "100 ms, x2, capped at 30 s").
const RECONNECT_INITIAL: Duration = Duration::from_millis(100);
/// Reconnect backoff cap.
const RECONNECT_CAP: Duration = Duration::from_secs(30);

/// Streams a subscription can request (spec.md §3 `StreamMessage`, §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "camelCase")]
pub enum StreamType {
    Ledger,
    Transactions,
    Validations,
    Account,
}

impl StreamType {
    /// Map a pushed frame's rippled `type` field to the stream it belongs
    /// to. `account` has no distinct wire `type` of its own -- account
    /// notifications arrive as `transaction` frames naming the subscribed
    /// account, so account-stream subscribers are dispatched alongside
    /// `Transactions` subscribers by [`Dispatcher::dispatch`].
    fn from_wire_type(wire_type: &str) -> Option<Self> {
        match wire_type {
            "ledgerClosed" => Some(StreamType::Ledger),
            "transaction" => Some(StreamType::Transactions),
            "validationReceived" => Some(StreamType::Validations),
            _ => None,
        }
    }
}

/// `{subscription_id, type, payload_json}` per spec.md §3.
#[derive(Debug, Clone)]
pub struct StreamMessage {
    pub subscription_id: u64,
    pub stream_type: StreamType,
    pub payload: Value,
}

struct Registration {
    streams: Vec<StreamType>,
    accounts: Vec<String>,
    sender: mpsc::UnboundedSender<StreamMessage>,
}

/// Pure, network-free fan-out table: which subscriptions want which
/// streams, and the JSON-RPC `subscribe` bodies needed to re-establish all
/// of them after a reconnect. Split out from [`WsClient`] so the dispatch
/// and re-subscription logic is unit-testable without a socket, the same
/// way [`crate::coordinator::batching::form_batches`] is.
#[derive(Default)]
struct Dispatcher {
    subscriptions: HashMap<u64, Registration>,
}

impl Dispatcher {
    fn insert(&mut self, id: u64, registration: Registration) {
        self.subscriptions.insert(id, registration);
    }

    /// Idempotent: removing an id that was already removed (e.g. both the
    /// consumer's `cancel()` and its `Drop` firing) is a no-op, satisfying
    /// spec.md §8 invariant 6's "once the second subscription is torn
    /// down" half without a double free.
    fn remove(&mut self, id: u64) {
        self.subscriptions.remove(&id);
    }

    /// Fan `value` out to every live subscription whose stream set wants
    /// it. A subscription registered twice (two distinct ids, same
    /// streams) gets two independent deliveries -- spec.md §8 invariant 6
    /// is about one *subscription* yielding one callback per event, not
    /// about two concurrently-live ones collapsing into one.
    fn dispatch(&self, value: &Value) {
        let wire_type = match value.get("type").and_then(Value::as_str) {
            Some(t) => t,
            None => return,
        };
        let stream_type = match StreamType::from_wire_type(wire_type) {
            Some(t) => t,
            None => return,
        };
        let account = value.get("account").and_then(Value::as_str);

        for (id, registration) in &self.subscriptions {
            let wants_stream = registration.streams.contains(&stream_type);
            let wants_account = stream_type == StreamType::Transactions
                && registration.streams.contains(&StreamType::Account)
                && account
                    .map(|a| registration.accounts.iter().any(|want| want == a))
                    .unwrap_or(false);
            if wants_stream || wants_account {
                let message = StreamMessage {
                    subscription_id: *id,
                    stream_type: if wants_account && !wants_stream {
                        StreamType::Account
                    } else {
                        stream_type
                    },
                    payload: value.clone(),
                };
                // A subscriber that dropped its receiver without calling
                // `cancel()`/letting `Drop` run yet; the next `remove()`
                // tidies the table. Dispatch must not fail the whole fan-out
                // over one dead receiver.
                let _ = registration.sender.send(message);
            }
        }
    }

    /// Rebuild the `subscribe` command bodies for every currently
    /// registered subscription (spec.md §4.5: "on reconnect, all prior
    /// subscriptions are re-issued").
    fn resubscribe_commands(&self) -> Vec<Value> {
        self.subscriptions
            .values()
            .map(|registration| subscribe_command(&registration.streams, &registration.accounts))
            .collect()
    }
}

fn stream_param(stream_type: StreamType) -> &'static str {
    match stream_type {
        StreamType::Ledger => "ledger",
        StreamType::Transactions => "transactions",
        StreamType::Validations => "validations",
        StreamType::Account => "transactions",
    }
}

fn subscribe_command(streams: &[StreamType], accounts: &[String]) -> Value {
    let stream_params: Vec<&str> = streams
        .iter()
        .copied()
        .map(stream_param)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect();
    let mut command = json!({
        "command": "subscribe",
        "streams": stream_params,
    });
    if !accounts.is_empty() {
        command["accounts"] = json!(accounts);
    }
    command
}

fn unsubscribe_command(streams: &[StreamType], accounts: &[String]) -> Value {
    let mut command = subscribe_command(streams, accounts);
    command["command"] = json!("unsubscribe");
    command
}

struct WsClientInner {
    url: String,
    monitoring: Arc<Monitoring>,
    sink: AsyncMutex<Option<WsSink>>,
    dispatcher: StdMutex<Dispatcher>,
    pending: StdMutex<HashMap<u64, oneshot::Sender<Value>>>,
    next_id: AtomicU64,
    shutdown: AsyncMutex<bool>,
}

impl WsClientInner {
    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn send_raw(&self, mut command: Value) -> CoreResult<u64> {
        let id = self.next_id();
        command["id"] = json!(id);
        let text = serde_json::to_string(&command).map_err(|e| CoreError::Internal(e.to_string()))?;
        let mut guard = self.sink.lock().await;
        let sink = guard
            .as_mut()
            .ok_or_else(|| CoreError::TransportError {
                status: None,
                body: "websocket not connected".to_string(),
            })?;
        sink.send(Message::Text(text))
            .await
            .map_err(|e| CoreError::TransportError {
                status: None,
                body: e.to_string(),
            })?;
        Ok(id)
    }

    fn dispatch_frame(&self, text: &str) {
        let value: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(error) => {
                warn!(%error, "undecodable websocket frame, dropping");
                return;
            }
        };

        if let Some(id) = value.get("id").and_then(Value::as_u64) {
            if let Some(sender) = self.pending.lock().unwrap().remove(&id) {
                let _ = sender.send(value);
                return;
            }
        }

        self.dispatcher.lock().unwrap().dispatch(&value);
    }

    async fn reconnect_and_restart(self: Arc<Self>) {
        if *self.shutdown.lock().await {
            return;
        }

        let mut backoff = RECONNECT_INITIAL;
        loop {
            tokio::time::sleep(backoff).await;
            match connect_async(&self.url).await {
                Ok((stream, _)) => {
                    info!(url = %self.url, "websocket reconnected");
                    self.monitoring.record_ws_reconnect();
                    let (sink, source) = stream.split();
                    *self.sink.lock().await = Some(sink);

                    let commands = self.dispatcher.lock().unwrap().resubscribe_commands();
                    for command in commands {
                        if let Err(error) = self.send_raw(command).await {
                            warn!(%error, "failed to re-issue subscription after reconnect");
                        }
                    }

                    tokio::spawn(run_reader(self.clone(), source));
                    return;
                }
                Err(error) => {
                    warn!(%error, backoff_ms = backoff.as_millis() as u64, "websocket reconnect attempt failed");
                    backoff = (backoff * 2).min(RECONNECT_CAP);
                }
            }
        }
    }
}

async fn run_reader(inner: Arc<WsClientInner>, mut source: WsSource) {
    loop {
        match source.next().await {
            Some(Ok(Message::Text(text))) => inner.dispatch_frame(&text),
            Some(Ok(Message::Binary(bytes))) => {
                if let Ok(text) = String::from_utf8(bytes) {
                    inner.dispatch_frame(&text);
                }
            }
            Some(Ok(Message::Close(_))) | None => {
                warn!("websocket closed by peer, reconnecting");
                break;
            }
            Some(Ok(_)) => continue,
            Some(Err(error)) => {
                warn!(%error, "websocket read error, reconnecting");
                break;
            }
        }
    }

    *inner.sink.lock().await = None;
    inner.reconnect_and_restart().await;
}

/// A live subscription over one or more streams. Receive pushed messages
/// with [`Subscription::recv`]; canceling (explicitly, or implicitly via
/// `Drop`) unsubscribes and frees the dispatcher's entry within one tick
/// (spec.md §5: "cancellation stops polling and unsubscribes from WS
/// streams within one tick").
pub struct Subscription {
    id: u64,
    streams: Vec<StreamType>,
    accounts: Vec<String>,
    receiver: mpsc::UnboundedReceiver<StreamMessage>,
    client: Arc<WsClientInner>,
    canceled: bool,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub async fn recv(&mut self) -> Option<StreamMessage> {
        self.receiver.recv().await
    }

    /// Unsubscribe and free the dispatcher entry. Idempotent with `Drop`.
    pub async fn cancel(mut self) {
        self.teardown().await;
    }

    async fn teardown(&mut self) {
        if self.canceled {
            return;
        }
        self.canceled = true;
        self.client.dispatcher.lock().unwrap().remove(self.id);
        let command = unsubscribe_command(&self.streams, &self.accounts);
        let _ = self.client.send_raw(command).await;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self.canceled {
            return;
        }
        self.client.dispatcher.lock().unwrap().remove(self.id);
        let client = self.client.clone();
        let streams = self.streams.clone();
        let accounts = self.accounts.clone();
        tokio::spawn(async move {
            let command = unsubscribe_command(&streams, &accounts);
            let _ = client.send_raw(command).await;
        });
    }
}

/// A single multiplexed WebSocket connection to the XRPL cluster (spec.md
/// §4.5). Process-wide singleton once connected (spec.md §5).
pub struct WsClient {
    inner: Arc<WsClientInner>,
}

impl WsClient {
    pub async fn connect(url: impl Into<String>, monitoring: Arc<Monitoring>) -> CoreResult<Self> {
        let url = url.into();
        let (stream, _) = connect_async(&url).await.map_err(|e| CoreError::TransportError {
            status: None,
            body: e.to_string(),
        })?;
        let (sink, source) = stream.split();

        let inner = Arc::new(WsClientInner {
            url,
            monitoring,
            sink: AsyncMutex::new(Some(sink)),
            dispatcher: StdMutex::new(Dispatcher::default()),
            pending: StdMutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            shutdown: AsyncMutex::new(false),
        });

        tokio::spawn(run_reader(inner.clone(), source));
        Ok(WsClient { inner })
    }

    /// Subscribe to `streams` (optionally scoped to `accounts` for the
    /// `account` stream). Subscribing twice with the same arguments yields
    /// two independent [`Subscription`]s, each receiving one callback per
    /// event until its own `cancel()`/`Drop` runs (spec.md §8 invariant 6).
    pub async fn subscribe(
        &self,
        streams: Vec<StreamType>,
        accounts: Vec<String>,
    ) -> CoreResult<Subscription> {
        let id = self.inner.next_id();
        let (sender, receiver) = mpsc::unbounded_channel();
        self.inner.dispatcher.lock().unwrap().insert(
            id,
            Registration {
                streams: streams.clone(),
                accounts: accounts.clone(),
                sender,
            },
        );

        let command = subscribe_command(&streams, &accounts);
        self.inner.send_raw(command).await?;

        Ok(Subscription {
            id,
            streams,
            accounts,
            receiver,
            client: self.inner.clone(),
            canceled: false,
        })
    }

    /// Issue any JSON-RPC method as a request/response call over the same
    /// connection (spec.md §6: "commands subscribe, unsubscribe, ping,
    /// plus any JSON-RPC method as a request/response call").
    pub async fn request(&self, method: &str, params: Value) -> CoreResult<Value> {
        let mut command = params;
        command["command"] = json!(method);
        let id = self.inner.next_id();
        command["id"] = json!(id);

        let (sender, receiver) = oneshot::channel();
        self.inner.pending.lock().unwrap().insert(id, sender);

        let text = serde_json::to_string(&command).map_err(|e| CoreError::Internal(e.to_string()))?;
        {
            let mut guard = self.inner.sink.lock().await;
            let sink = guard.as_mut().ok_or_else(|| CoreError::TransportError {
                status: None,
                body: "websocket not connected".to_string(),
            })?;
            sink.send(Message::Text(text))
                .await
                .map_err(|e| CoreError::TransportError {
                    status: None,
                    body: e.to_string(),
                })?;
        }

        receiver.await.map_err(|_| CoreError::CancellationError)
    }

    pub async fn ping(&self) -> CoreResult<Value> {
        self.request("ping", json!({})).await
    }

    /// Close the connection and stop reconnecting (spec.md §5: "Shutdown
    /// closes the WS, cancels all subscriptions").
    pub async fn shutdown(&self) {
        *self.inner.shutdown.lock().await = true;
        self.inner.dispatcher.lock().unwrap().subscriptions.clear();
        if let Some(mut sink) = self.inner.sink.lock().await.take() {
            let _ = sink.close().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_closed_frame() -> Value {
        json!({"type": "ledgerClosed", "ledger_index": 42})
    }

    fn transaction_frame(account: &str) -> Value {
        json!({"type": "transaction", "account": account, "hash": "ABCD"})
    }

    #[test]
    fn stream_type_maps_known_wire_types() {
        assert_eq!(StreamType::from_wire_type("ledgerClosed"), Some(StreamType::Ledger));
        assert_eq!(
            StreamType::from_wire_type("transaction"),
            Some(StreamType::Transactions)
        );
        assert_eq!(
            StreamType::from_wire_type("validationReceived"),
            Some(StreamType::Validations)
        );
        assert_eq!(StreamType::from_wire_type("response"), None);
    }

    #[test]
    fn dispatch_fans_a_ledger_event_out_to_every_subscriber() {
        let mut dispatcher = Dispatcher::default();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        dispatcher.insert(
            1,
            Registration {
                streams: std::vec![StreamType::Ledger],
                accounts: Vec::new(),
                sender: tx1,
            },
        );
        dispatcher.insert(
            2,
            Registration {
                streams: std::vec![StreamType::Ledger],
                accounts: Vec::new(),
                sender: tx2,
            },
        );

        dispatcher.dispatch(&ledger_closed_frame());

        assert!(rx1.try_recv().is_ok());
        assert!(rx2.try_recv().is_ok());
    }

    #[test]
    fn tearing_down_one_subscription_leaves_the_other_receiving_once_per_event() {
        let mut dispatcher = Dispatcher::default();
        let (tx1, mut rx1) = mpsc::unbounded_channel();
        let (tx2, mut rx2) = mpsc::unbounded_channel();
        dispatcher.insert(
            1,
            Registration {
                streams: std::vec![StreamType::Ledger],
                accounts: Vec::new(),
                sender: tx1,
            },
        );
        dispatcher.insert(
            2,
            Registration {
                streams: std::vec![StreamType::Ledger],
                accounts: Vec::new(),
                sender: tx2,
            },
        );

        // Two live subscriptions to the same stream: one callback each.
        dispatcher.dispatch(&ledger_closed_frame());
        assert_eq!(rx1.try_recv().is_ok(), true);
        assert_eq!(rx2.try_recv().is_ok(), true);

        // Tear down the second; the first keeps receiving exactly once per
        // event (spec.md §8 invariant 6).
        dispatcher.remove(2);
        dispatcher.dispatch(&ledger_closed_frame());
        assert!(rx1.try_recv().is_ok());
        assert!(rx1.try_recv().is_err());
        assert!(rx2.try_recv().is_err());

        // Removing an already-removed id is a no-op.
        dispatcher.remove(2);
    }

    #[test]
    fn account_stream_dispatches_only_the_matching_account() {
        let mut dispatcher = Dispatcher::default();
        let (tx, mut rx) = mpsc::unbounded_channel();
        dispatcher.insert(
            1,
            Registration {
                streams: std::vec![StreamType::Account],
                accounts: std::vec!["rWatched1111111111111111111".to_string()],
                sender: tx,
            },
        );

        dispatcher.dispatch(&transaction_frame("rOther11111111111111111111"));
        assert!(rx.try_recv().is_err());

        dispatcher.dispatch(&transaction_frame("rWatched1111111111111111111"));
        let message = rx.try_recv().unwrap();
        assert_eq!(message.stream_type, StreamType::Account);
    }

    #[test]
    fn resubscribe_commands_cover_every_live_registration() {
        let mut dispatcher = Dispatcher::default();
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        dispatcher.insert(
            1,
            Registration {
                streams: std::vec![StreamType::Ledger],
                accounts: Vec::new(),
                sender: tx1,
            },
        );
        dispatcher.insert(
            2,
            Registration {
                streams: std::vec![StreamType::Transactions],
                accounts: std::vec!["rWatched1111111111111111111".to_string()],
                sender: tx2,
            },
        );

        let commands = dispatcher.resubscribe_commands();
        assert_eq!(commands.len(), 2);
        assert!(commands
            .iter()
            .any(|c| c["streams"] == json!(["ledger"]) && c.get("accounts").is_none()));
        assert!(commands.iter().any(|c| c["accounts"]
            == json!(["rWatched1111111111111111111"])));
    }

    #[test]
    fn subscribe_command_deduplicates_stream_params() {
        let command = subscribe_command(
            &[StreamType::Account, StreamType::Transactions],
            &["rWatched".to_string()],
        );
        assert_eq!(command["streams"], json!(["transactions"]));
        assert_eq!(command["command"], json!("subscribe"));
    }
}
