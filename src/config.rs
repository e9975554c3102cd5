//! Typed environment configuration for the Core (spec.md §6), loaded once
//! at `init` and immutable afterward.

use alloc::string::{String, ToString};

/// XRPL testnet network id (spec.md §6).
pub const TESTNET_NETWORK_ID: u32 = 21338;

pub const DEFAULT_NETWORK_URL: &str = "https://s.altnet.rippletest.net:51234";
pub const DEFAULT_WEBSOCKET_URL: &str = "wss://s.altnet.rippletest.net:51233";
pub const DEFAULT_FAUCET_URL: &str = "https://faucet.altnet.rippletest.net/accounts";

pub const DEFAULT_WORKER_POOL_SIZE: usize = 8;
pub const DEFAULT_MAX_BATCH_SIZE: usize = 10;
pub const DEFAULT_MIN_BATCH_SIZE: usize = 2;
pub const DEFAULT_MAX_WAIT_TIME_SECS: u64 = 30;
pub const DEFAULT_BATCH_TIMEOUT_SECS: u64 = 300;
pub const DEFAULT_SUBMIT_RETRY_MAX: u8 = 3;
pub const DEFAULT_SUBMIT_RETRY_BASE_MS: u64 = 1_000;

/// Recognized environment options (spec.md §6).
#[derive(Debug, Clone)]
pub struct Config {
    pub network_url: String,
    pub websocket_url: String,
    pub testnet: bool,
    pub network_id: Option<u32>,
    pub faucet_url: String,
    pub worker_pool_size: usize,
    pub max_batch_size: usize,
    pub min_batch_size: usize,
    pub max_wait_time_secs: u64,
    pub batch_timeout_secs: u64,
    pub submit_retry_max: u8,
    pub submit_retry_base_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            network_url: DEFAULT_NETWORK_URL.to_string(),
            websocket_url: DEFAULT_WEBSOCKET_URL.to_string(),
            testnet: true,
            network_id: Some(TESTNET_NETWORK_ID),
            faucet_url: DEFAULT_FAUCET_URL.to_string(),
            worker_pool_size: DEFAULT_WORKER_POOL_SIZE,
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            min_batch_size: DEFAULT_MIN_BATCH_SIZE,
            max_wait_time_secs: DEFAULT_MAX_WAIT_TIME_SECS,
            batch_timeout_secs: DEFAULT_BATCH_TIMEOUT_SECS,
            submit_retry_max: DEFAULT_SUBMIT_RETRY_MAX,
            submit_retry_base_ms: DEFAULT_SUBMIT_RETRY_BASE_MS,
        }
    }
}

impl Config {
    /// Derive the WS endpoint from a JSON-RPC `network_url` by swapping the
    /// scheme (`http`->`ws`, `https`->`wss`) and port (51233), per spec.md
    /// §6: "if unset, derived from network_url by scheme swap and port
    /// 51233".
    pub fn derive_websocket_url(network_url: &str) -> String {
        let (scheme, rest) = match network_url.split_once("://") {
            Some((scheme, rest)) => (scheme, rest),
            None => ("https", network_url),
        };
        let ws_scheme = match scheme {
            "http" => "ws",
            _ => "wss",
        };
        let host = rest.split('/').next().unwrap_or(rest);
        let host = host.split(':').next().unwrap_or(host);
        alloc::format!("{}://{}:51233", ws_scheme, host)
    }
}

/// Environment-variable loading. `std`-only: every other concern in this
/// module (defaults, the websocket-url derivation) is usable from the
/// `no_std + alloc` wire-protocol layer as well.
#[cfg(feature = "std")]
mod env_loader {
    use super::*;
    use std::env;

    impl Config {
        /// Load configuration from the recognized environment variables
        /// (spec.md §6), falling back to `Config::default()` values for any
        /// variable that is unset or fails to parse.
        pub fn from_env() -> Self {
            let defaults = Config::default();

            let network_url = env_string("network_url").unwrap_or(defaults.network_url);
            let testnet = env_bool("testnet").unwrap_or(defaults.testnet);
            let websocket_url = env_string("websocket_url")
                .unwrap_or_else(|| Config::derive_websocket_url(&network_url));
            let network_id = if testnet {
                Some(TESTNET_NETWORK_ID)
            } else {
                env_u32("network_id").or(defaults.network_id)
            };

            Config {
                network_url,
                websocket_url,
                testnet,
                network_id,
                faucet_url: env_string("faucet_url").unwrap_or(defaults.faucet_url),
                worker_pool_size: env_usize("worker_pool_size")
                    .unwrap_or(defaults.worker_pool_size),
                max_batch_size: env_usize("max_batch_size").unwrap_or(defaults.max_batch_size),
                min_batch_size: env_usize("min_batch_size").unwrap_or(defaults.min_batch_size),
                max_wait_time_secs: env_u64("max_wait_time")
                    .unwrap_or(defaults.max_wait_time_secs),
                batch_timeout_secs: env_u64("batch_timeout_seconds")
                    .unwrap_or(defaults.batch_timeout_secs),
                submit_retry_max: env_u8("submit_retry_max").unwrap_or(defaults.submit_retry_max),
                submit_retry_base_ms: env_u64("submit_retry_base_ms")
                    .unwrap_or(defaults.submit_retry_base_ms),
            }
        }
    }

    fn env_string(key: &str) -> Option<String> {
        env::var(key).ok().filter(|v| !v.is_empty())
    }

    fn env_bool(key: &str) -> Option<bool> {
        env::var(key).ok().and_then(|v| v.parse().ok())
    }

    fn env_u32(key: &str) -> Option<u32> {
        env::var(key).ok().and_then(|v| v.parse().ok())
    }

    fn env_u64(key: &str) -> Option<u64> {
        env::var(key).ok().and_then(|v| v.parse().ok())
    }

    fn env_u8(key: &str) -> Option<u8> {
        env::var(key).ok().and_then(|v| v.parse().ok())
    }

    fn env_usize(key: &str) -> Option<usize> {
        env::var(key).ok().and_then(|v| v.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_websocket_url_from_https_network_url() {
        assert_eq!(
            Config::derive_websocket_url("https://s.altnet.rippletest.net:51234"),
            "wss://s.altnet.rippletest.net:51233"
        );
    }

    #[test]
    fn derives_websocket_url_from_http_network_url() {
        assert_eq!(
            Config::derive_websocket_url("http://localhost:51234"),
            "ws://localhost:51233"
        );
    }

    #[test]
    fn default_config_matches_spec_literals() {
        let config = Config::default();
        assert_eq!(config.network_id, Some(TESTNET_NETWORK_ID));
        assert_eq!(config.max_batch_size, 10);
        assert_eq!(config.min_batch_size, 2);
        assert_eq!(config.submit_retry_max, 3);
    }
}
