#![no_std]
#![allow(dead_code)] // Remove eventually

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std as alloc;
// The service layer (C7-C10: escrow, coordinator, events, monitoring) is
// std-only and wants `std::` paths directly (env, time, sync primitives
// beyond what `core`/`alloc` cover) rather than going through the `alloc`
// alias above.
#[cfg(feature = "std")]
extern crate std;

#[doc(hidden)]
pub mod _anyhow;
#[doc(hidden)]
pub mod _serde;

#[cfg(any(feature = "websocket", feature = "json-rpc"))]
pub mod asynch;
pub mod config;
pub mod constants;
#[cfg(feature = "core")]
pub mod core;
pub mod error;
pub mod macros;
#[cfg(feature = "models")]
pub mod models;
pub mod utils;
pub mod wallet;

#[cfg(feature = "core-services")]
pub mod coordinator;
#[cfg(feature = "core-services")]
pub mod escrow;
#[cfg(feature = "core-services")]
pub mod events;
#[cfg(feature = "core-services")]
pub mod monitoring;
