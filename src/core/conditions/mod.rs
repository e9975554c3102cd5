//! PREIMAGE-SHA-256 crypto-conditions and fulfillments for milestone-gated
//! escrows.
//!
//! Only the PREIMAGE-SHA-256 condition type is implemented; the XRPL Escrow
//! Manager never needs the other crypto-conditions RFC types (PREFIX, RSA,
//! THRESHOLD, ED25519-SHA) so they are out of scope here.

pub mod exceptions;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rand::Rng;
use rand::SeedableRng;
use sha2::{Digest, Sha256};

use exceptions::XRPLConditionException;

/// ASN.1 context tag for the PREIMAGE-SHA-256 condition type (type 0).
const CONDITION_TAG: u8 = 0xA0;
/// ASN.1 context tag for the PREIMAGE-SHA-256 fulfillment type (type 0).
const FULFILLMENT_TAG: u8 = 0xA0;
const FINGERPRINT_TAG: u8 = 0x80;
const COST_TAG: u8 = 0x81;
const PREIMAGE_TAG: u8 = 0x80;

/// Length, in bytes, of a milestone preimage.
pub const PREIMAGE_LENGTH: usize = 32;

/// A PREIMAGE-SHA-256 crypto-condition: the SHA-256 digest of a 32-byte
/// preimage, DER-encoded per the crypto-conditions RFC subset the XRPL
/// ledger enforces, and rendered as uppercase hex for the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    der: Vec<u8>,
    hex: String,
}

/// A PREIMAGE-SHA-256 fulfillment: carries the preimage itself. Submitted
/// in an `EscrowFinish` alongside the matching `Condition`'s hex so the
/// ledger can verify `SHA-256(fulfillment.preimage) == condition.fingerprint`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fulfillment {
    der: Vec<u8>,
    hex: String,
    preimage: [u8; PREIMAGE_LENGTH],
}

impl Condition {
    /// Derive a condition from a 32-byte preimage.
    ///
    /// DER layout: `A0 25 80 20 <32-byte fingerprint> 81 01 <cost>`.
    pub fn from_preimage(preimage: &[u8; PREIMAGE_LENGTH]) -> Self {
        let fingerprint = Sha256::digest(preimage);
        let cost = PREIMAGE_LENGTH as u8;

        let mut inner = Vec::with_capacity(2 + PREIMAGE_LENGTH + 3);
        inner.push(FINGERPRINT_TAG);
        inner.push(PREIMAGE_LENGTH as u8);
        inner.extend_from_slice(&fingerprint);
        inner.push(COST_TAG);
        inner.push(1);
        inner.push(cost);

        let mut der = Vec::with_capacity(2 + inner.len());
        der.push(CONDITION_TAG);
        der.push(inner.len() as u8);
        der.extend_from_slice(&inner);

        let hex = hex::encode_upper(&der);
        Condition { der, hex }
    }

    /// Parse a condition from its uppercase (or any-case) hex wire form.
    pub fn from_hex(hex_str: &str) -> Result<Self, XRPLConditionException> {
        let der = hex::decode(hex_str)?;
        Self::from_der(der)
    }

    fn from_der(der: Vec<u8>) -> Result<Self, XRPLConditionException> {
        if der.len() < 4 {
            return Err(XRPLConditionException::Truncated);
        }
        if der[0] != CONDITION_TAG {
            return Err(XRPLConditionException::InvalidDerTag {
                expected: CONDITION_TAG,
                found: der[0],
            });
        }
        let hex = hex::encode_upper(&der);
        Ok(Condition { der, hex })
    }

    /// The DER-encoded, uppercase hex wire representation.
    pub fn to_hex(&self) -> &str {
        &self.hex
    }

    /// The raw DER bytes.
    pub fn as_der(&self) -> &[u8] {
        &self.der
    }
}

impl Fulfillment {
    /// Build a fulfillment from its 32-byte preimage.
    ///
    /// DER layout: `A0 22 80 20 <32-byte preimage>`.
    pub fn from_preimage(preimage: [u8; PREIMAGE_LENGTH]) -> Self {
        let mut inner = Vec::with_capacity(2 + PREIMAGE_LENGTH);
        inner.push(PREIMAGE_TAG);
        inner.push(PREIMAGE_LENGTH as u8);
        inner.extend_from_slice(&preimage);

        let mut der = Vec::with_capacity(2 + inner.len());
        der.push(FULFILLMENT_TAG);
        der.push(inner.len() as u8);
        der.extend_from_slice(&inner);

        let hex = hex::encode_upper(&der);
        Fulfillment {
            der,
            hex,
            preimage,
        }
    }

    /// Parse a fulfillment from its hex wire form.
    pub fn from_hex(hex_str: &str) -> Result<Self, XRPLConditionException> {
        let der = hex::decode(hex_str)?;
        if der.len() < 4 {
            return Err(XRPLConditionException::Truncated);
        }
        if der[0] != FULFILLMENT_TAG {
            return Err(XRPLConditionException::InvalidDerTag {
                expected: FULFILLMENT_TAG,
                found: der[0],
            });
        }
        let preimage_len = der[3] as usize;
        if preimage_len != PREIMAGE_LENGTH || der.len() < 4 + preimage_len {
            return Err(XRPLConditionException::InvalidPreimageLength {
                expected: PREIMAGE_LENGTH,
                found: preimage_len,
            });
        }
        let mut preimage = [0u8; PREIMAGE_LENGTH];
        preimage.copy_from_slice(&der[4..4 + preimage_len]);
        let hex = hex::encode_upper(&der);
        Ok(Fulfillment {
            der,
            hex,
            preimage,
        })
    }

    /// The condition this fulfillment satisfies. The Escrow Manager calls
    /// this before submitting `EscrowFinish` to self-check the fulfillment
    /// against the condition it is about to assert on the wire.
    pub fn condition(&self) -> Condition {
        Condition::from_preimage(&self.preimage)
    }

    /// The DER-encoded, uppercase hex wire representation.
    pub fn to_hex(&self) -> &str {
        &self.hex
    }

    /// The raw preimage. Never persisted by callers; the Core returns it to
    /// the caller once and never stores it itself.
    pub fn preimage(&self) -> &[u8; PREIMAGE_LENGTH] {
        &self.preimage
    }
}

/// Generate 32 random bytes for a fresh milestone preimage, using the same
/// CSPRNG path as `core::keypairs::generate_seed`.
pub fn generate_preimage() -> [u8; PREIMAGE_LENGTH] {
    let mut bytes = [0u8; PREIMAGE_LENGTH];
    let mut rng = rand_hc::Hc128Rng::from_entropy();
    rng.fill(&mut bytes);
    bytes
}

/// Verification method used to satisfy a milestone's condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum VerificationMethod {
    Oracle,
    Manual,
    Hybrid,
}

/// Derive the compound secret for an escrow conditioned on multiple
/// milestones:
/// `SHA-256("compound_" || unix_seconds || Π(milestone_id || "_" || method))`.
///
/// The resulting preimage is the sole secret the ledger ever sees; callers
/// build a single `Condition`/`Fulfillment` pair from it exactly as they
/// would for a single-milestone escrow.
pub fn derive_compound_secret(
    unix_seconds: u64,
    milestones: &[(String, VerificationMethod)],
) -> [u8; PREIMAGE_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(b"compound_");
    hasher.update(unix_seconds.to_string().as_bytes());
    for (milestone_id, method) in milestones {
        hasher.update(format!("{}_{}", milestone_id, method).as_bytes());
    }
    let digest = hasher.finalize();
    let mut out = [0u8; PREIMAGE_LENGTH];
    out.copy_from_slice(&digest);
    out
}
