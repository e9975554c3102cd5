//! Core codec functions for interacting with the XRPL.

pub mod addresscodec;
pub mod binarycodec;
pub mod conditions;
pub mod definitions;
pub mod keypairs;
pub mod types;
