//! Fee selection and retry backoff, pure functions so the engine's timing
//! decisions are unit-testable without a runtime (spec.md §4.8 "Submission"
//! / "Retry policy").

use std::time::Duration;

use rand::Rng;

use super::model::TransactionType;

/// Default fee schedule (spec.md §4.8: "default 12 drops; escrow 12;
/// wallet_setup 15"). Payment and every Escrow* operation share the
/// default; only `wallet_setup` differs.
pub fn default_fee_drops(tx_type: TransactionType) -> u64 {
    match tx_type {
        TransactionType::WalletSetup => 15,
        TransactionType::Payment
        | TransactionType::EscrowCreate
        | TransactionType::EscrowFinish
        | TransactionType::EscrowCancel => 12,
    }
}

/// Exponential backoff (1s, 2s, 4s, ...) with +/-20% jitter, keyed by the
/// retry attempt about to be made (spec.md §4.8: "Retries use exponential
/// backoff (1 s, 2 s, 4 s) with +/-20% jitter").
///
/// `attempt` is 1-indexed: the first retry (`retry_count` going from 0 to
/// 1) backs off ~1s, the second ~2s, the third ~4s.
pub fn backoff_with_jitter(attempt: u8, base_ms: u64) -> Duration {
    let exponent = attempt.saturating_sub(1).min(16);
    let nominal_ms = base_ms.saturating_mul(1u64 << exponent);
    let jitter_fraction = rand::thread_rng().gen_range(-0.2..=0.2);
    let jittered_ms = (nominal_ms as f64) * (1.0 + jitter_fraction);
    Duration::from_millis(jittered_ms.max(0.0) as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wallet_setup_fee_differs_from_default() {
        assert_eq!(default_fee_drops(TransactionType::WalletSetup), 15);
        assert_eq!(default_fee_drops(TransactionType::Payment), 12);
        assert_eq!(default_fee_drops(TransactionType::EscrowCreate), 12);
        assert_eq!(default_fee_drops(TransactionType::EscrowFinish), 12);
        assert_eq!(default_fee_drops(TransactionType::EscrowCancel), 12);
    }

    #[test]
    fn backoff_grows_exponentially_within_jitter_bounds() {
        for attempt in 1..=3 {
            let delay = backoff_with_jitter(attempt, 1_000);
            let nominal = 1_000u64 << (attempt - 1);
            let lower = (nominal as f64 * 0.8) as u64;
            let upper = (nominal as f64 * 1.2) as u64;
            let millis = delay.as_millis() as u64;
            assert!(
                millis >= lower.saturating_sub(1) && millis <= upper + 1,
                "attempt {attempt}: {millis}ms not within [{lower}, {upper}]"
            );
        }
    }
}
