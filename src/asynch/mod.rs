#[cfg(all(
    feature = "account-helpers",
    any(feature = "websocket", feature = "json-rpc")
))]
pub mod account;
#[cfg(any(feature = "websocket", feature = "json-rpc"))]
pub mod clients;
#[cfg(all(
    feature = "ledger-helpers",
    any(feature = "websocket", feature = "json-rpc")
))]
pub mod ledger;
#[cfg(all(
    feature = "transaction-helpers",
    any(feature = "websocket", feature = "json-rpc")
))]
pub mod transaction;
#[cfg(all(
    feature = "wallet-helpers",
    any(feature = "websocket", feature = "json-rpc")
))]
pub mod wallet;

#[cfg(feature = "core-services")]
pub mod ledger_client;
#[cfg(feature = "core-services")]
pub mod streaming;
