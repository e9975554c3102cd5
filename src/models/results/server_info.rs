use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Amount;

/// Server information
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Info<'a> {
    /// If true, this server is amendment blocked
    pub amendment_blocked: Option<bool>,
    /// The version number of the running rippled server
    pub build_version: Cow<'a, str>,
    /// Information about the most recently closed ledger that has not been
    /// validated
    pub closed_ledger: Option<LedgerInfo<'a>>,
    /// Range expression indicating the sequence numbers of the ledger versions
    /// in the database
    pub complete_ledgers: Cow<'a, str>,
    /// Performance metrics for RPC calls and JobQueue
    pub counters: Option<Value>,
    /// Items currently being run in the job queue
    pub current_activity: Option<Value>,
    /// Server hostname or RFC-1751 word based on node public key
    pub hostid: Option<Cow<'a, str>>,
    /// Amount of time spent waiting for I/O operations, in milliseconds
    pub io_latency_ms: u32,
    /// Number of times server had over 250 transactions waiting
    pub jq_trans_overflow: Option<Cow<'a, str>>,
    /// Information about the last ledger close
    pub last_close: LastClose,
    /// Detailed information about the current load state
    pub load: Option<Load<'a>>,
    /// Current transaction cost multiplier
    pub load_factor: u32,
    /// Transaction cost multiplier based on local load
    pub load_factor_local: Option<u32>,
    /// Transaction cost multiplier from network load
    pub load_factor_net: Option<u32>,
    /// Transaction cost multiplier from cluster load
    pub load_factor_cluster: Option<u32>,
    /// Transaction cost multiplier for open ledger
    pub load_factor_fee_escalation: Option<u32>,
    /// Transaction cost multiplier for queue
    pub load_factor_fee_queue: Option<u32>,
    /// Transaction cost multiplier excluding open ledger
    pub load_factor_server: Option<u32>,
    /// Network id for ledger
    pub network_id: Option<u32>,
    /// Number of connected peer servers
    pub peers: u32,
    /// List of ports listening for API commands
    pub ports: Option<Cow<'a, [Value]>>,
    /// Public key for peer-to-peer communications
    pub pubkey_node: Cow<'a, str>,
    /// Public key for ledger validations
    pub pubkey_validator: Option<Cow<'a, str>>,
    /// Reporting mode configuration information
    pub reporting: Option<Reporting<'a>>,
    /// Current server state
    pub server_state: Cow<'a, str>,
    /// Microseconds in current state
    pub server_state_duration_us: Option<Cow<'a, str>>,
    /// Server state accounting information
    pub state_accounting: Option<Value>,
    /// Current UTC time according to server
    pub time: Option<Cow<'a, str>>,
    /// Seconds server has been operational
    pub uptime: Option<u64>,
    /// Information about the most recent validated ledger
    pub validated_ledger: Option<LedgerInfo<'a>>,
    /// Minimum required trusted validations
    pub validation_quorum: u32,
    /// Validator list expiration time
    pub validator_list_expires: Option<u32>,
    /// Validator list information
    pub validator_list: Option<ValidatorList<'a>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ValidatorList<'a> {
    pub count: u32,
    pub expiration: Cow<'a, str>,
    pub status: Cow<'a, str>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LastClose {
    /// Time to reach consensus in seconds
    /// Note: This can return floating pointer as well, but f64 doesn't implement Eq
    pub converge_time_s: f64,
    /// Number of trusted validators considered
    pub proposers: u32,
}

impl PartialEq for LastClose {
    fn eq(&self, other: &Self) -> bool {
        self.converge_time_s == other.converge_time_s && self.proposers == other.proposers
    }

    fn ne(&self, other: &Self) -> bool {
        !self.eq(other)
    }
}

impl Eq for LastClose {
    fn assert_receiver_is_total_eq(&self) {}
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Load<'a> {
    /// Information about job types and time spent
    pub job_types: Cow<'a, [Value]>,
    /// Number of threads in main job pool
    pub threads: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Reporting<'a> {
    /// List of P2P-mode servers
    pub etl_sources: Cow<'a, [Value]>,
    /// Whether server is writing to external database
    pub is_writer: bool,
    /// Last publish time
    pub last_publish_time: Cow<'a, str>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LedgerInfo<'a> {
    /// Time since ledger close in seconds
    pub age: Option<u32>,
    /// Base fee in XRP (Not drops for some reason?)
    pub base_fee_xrp: Option<Amount<'a>>,
    /// Unique ledger hash
    pub hash: Cow<'a, str>,
    /// Minimum XRP reserve for accounts (Not drops for some reason?)
    pub reserve_base_xrp: Option<Amount<'a>>,
    /// Additional XRP reserve per owned object (Not drops for some reason?)
    pub reserve_inc_xrp: Option<Amount<'a>>,
    /// Ledger sequence number
    pub seq: u32,
}

/// Response format for the server_info command, which returns various
/// information about the rippled server's current state and configuration.
///
/// See Server Info:
/// `<https://xrpl.org/server_info.html#server_info>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ServerInfo<'a> {
    pub info: Info<'a>,
}
