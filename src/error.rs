//! The Core's single error taxonomy (spec.md §7).
//!
//! Every component (C1-C10) returns `CoreError` rather than inventing its
//! own untyped failure, so call sites at component boundaries only ever
//! need to match one enum. Kinds map 1:1 to the retry/terminal policy
//! table in spec.md §7; `CoreError::is_retryable()` is the single source
//! of truth the Transaction Coordinator consults before re-enqueuing.

use alloc::string::String;
use thiserror_no_std::Error;

use crate::core::addresscodec::exceptions::XRPLAddressCodecException;
use crate::core::conditions::exceptions::XRPLConditionException;
use crate::core::exceptions::XRPLCoreException;
use crate::core::keypairs::exceptions::XRPLKeypairsException;

pub type CoreResult<T> = core::result::Result<T, CoreError>;

/// The engine result classes the XRPL rippled server returns in
/// `submit`/`tx` responses (glossary: "Engine result").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineResultClass {
    /// `tes*` - applied successfully.
    Success,
    /// `ter*` - retriable if resubmitted (e.g. `terQUEUED`).
    Retry,
    /// `tef*` - failure, but the transaction was not and will not be
    /// applied with this sequence (e.g. `tefPAST_SEQ`).
    Failure,
    /// `tel*` - local error, node-specific, usually retriable with a
    /// different fee (e.g. `telINSUF_FEE_P`).
    Local,
    /// `tem*` - malformed, will never succeed.
    Malformed,
    /// `tec*` - claimed a fee but did not apply; terminal unless in the
    /// small retryable allow-list.
    Claimed,
}

/// Classify an XRPL engine result code by its three-letter prefix.
pub fn classify_engine_result(engine_result: &str) -> EngineResultClass {
    match engine_result.get(0..3) {
        Some("tes") => EngineResultClass::Success,
        Some("ter") => EngineResultClass::Retry,
        Some("tef") => EngineResultClass::Failure,
        Some("tel") => EngineResultClass::Local,
        Some("tem") => EngineResultClass::Malformed,
        Some("tec") => EngineResultClass::Claimed,
        _ => EngineResultClass::Malformed,
    }
}

/// `tec*` codes that are retried with a refreshed sequence/fee rather than
/// failed outright (spec.md §4.8 retry policy, §7 `LedgerSoftReject`).
const RETRYABLE_TEC: &[&str] = &["tecUNFUNDED", "tecINSUFF_FEE"];

/// Soft ledger errors retried per spec.md §4.8/§7 even though they are not
/// `ter*`/`tef*`/`tel*` by prefix.
const RETRYABLE_SOFT: &[&str] = &["terQUEUED", "tefPAST_SEQ", "telINSUF_FEE_P"];

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Address/amount/condition malformed. Returned to the caller; never
    /// retried.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// HTTP non-2xx, network failure. Retried with backoff up to
    /// `max_retries`.
    #[error("transport error (status {status:?}): {body}")]
    TransportError {
        status: Option<u16>,
        body: String,
    },

    /// JSON-RPC `error` field present. Retried only if `retryable` per the
    /// XRPL error class.
    #[error("protocol error {code:?}: {message}")]
    ProtocolError {
        code: Option<i32>,
        message: String,
    },

    /// `ter*`/`tef*`/`tel*` engine result (or a retryable `tec*`). Retried
    /// with refreshed sequence/fee.
    #[error("ledger soft reject: {engine_result}: {message}")]
    LedgerSoftReject {
        engine_result: String,
        message: String,
    },

    /// `tem*`/`tec*` other than the retryable allow-list. Terminal
    /// failure; an event is emitted; never retried.
    #[error("ledger hard reject: {engine_result}: {message}")]
    LedgerHardReject {
        engine_result: String,
        message: String,
    },

    /// `LastLedgerSequence` passed before validation. Terminal for the
    /// original transaction; the caller resubmits as a new transaction
    /// with a fresh `LastLedgerSequence`.
    #[error("transaction expired before validation (last_ledger_sequence={last_ledger_sequence})")]
    Expired { last_ledger_sequence: u32 },

    /// Caller canceled the operation. Silent; no event is emitted.
    #[error("operation canceled")]
    CancellationError,

    /// Invariant violation. Terminal; logged; surfaced to the operator.
    #[error("internal invariant violation: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether the Transaction Coordinator should return this transaction
    /// to `pending` with `retry_count += 1` (spec.md §7: "Local recovery
    /// applies to TransportError/ProtocolError/LedgerSoftReject").
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CoreError::TransportError { .. }
                | CoreError::ProtocolError { .. }
                | CoreError::LedgerSoftReject { .. }
        )
    }

    /// Build the correct ledger-reject variant for an engine result,
    /// honoring the small retryable `tec*` allow-list.
    pub fn from_engine_result(engine_result: &str, message: &str) -> Self {
        let retryable = RETRYABLE_SOFT.contains(&engine_result)
            || (classify_engine_result(engine_result) == EngineResultClass::Claimed
                && RETRYABLE_TEC.contains(&engine_result));
        if retryable {
            CoreError::LedgerSoftReject {
                engine_result: engine_result.into(),
                message: message.into(),
            }
        } else {
            CoreError::LedgerHardReject {
                engine_result: engine_result.into(),
                message: message.into(),
            }
        }
    }
}

impl From<XRPLAddressCodecException> for CoreError {
    fn from(err: XRPLAddressCodecException) -> Self {
        CoreError::InvalidInput(alloc::format!("{:?}", err))
    }
}

impl From<XRPLKeypairsException> for CoreError {
    fn from(err: XRPLKeypairsException) -> Self {
        CoreError::InvalidInput(alloc::format!("{:?}", err))
    }
}

impl From<XRPLConditionException> for CoreError {
    fn from(err: XRPLConditionException) -> Self {
        CoreError::InvalidInput(alloc::format!("{:?}", err))
    }
}

impl From<XRPLCoreException> for CoreError {
    fn from(err: XRPLCoreException) -> Self {
        CoreError::InvalidInput(alloc::format!("{}", err))
    }
}

#[cfg(feature = "std")]
impl From<anyhow::Error> for CoreError {
    fn from(err: anyhow::Error) -> Self {
        CoreError::TransportError {
            status: None,
            body: err.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::ProtocolError {
            code: None,
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "std")]
impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        CoreError::TransportError {
            status: err.status().map(|s| s.as_u16()),
            body: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_engine_results_by_prefix() {
        assert_eq!(classify_engine_result("tesSUCCESS"), EngineResultClass::Success);
        assert_eq!(classify_engine_result("terQUEUED"), EngineResultClass::Retry);
        assert_eq!(classify_engine_result("tefPAST_SEQ"), EngineResultClass::Failure);
        assert_eq!(
            classify_engine_result("telINSUF_FEE_P"),
            EngineResultClass::Local
        );
        assert_eq!(classify_engine_result("temMALFORMED"), EngineResultClass::Malformed);
        assert_eq!(
            classify_engine_result("tecCRYPTOCONDITION_ERROR"),
            EngineResultClass::Claimed
        );
    }

    #[test]
    fn soft_rejects_are_retryable_hard_rejects_are_not() {
        let soft = CoreError::from_engine_result("terQUEUED", "queued");
        assert!(soft.is_retryable());
        let hard = CoreError::from_engine_result("tecCRYPTOCONDITION_ERROR", "bad fulfillment");
        assert!(!hard.is_retryable());
    }
}
