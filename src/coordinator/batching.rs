//! Pure batch-formation logic (spec.md §4.8 "Batching"), split out from
//! the engine so the grouping/closing rules are testable without a
//! runtime: feed it a snapshot of batchable transactions and a clock, get
//! back the batches that are ready to submit.

use std::collections::HashMap;
use std::string::String;
use std::vec::Vec;

use crate::config::Config;

use super::model::{BatchStatus, Transaction, TransactionBatch, TransactionPriority};

fn new_batch_id(key: &(TransactionPriority, String, String), formed_at: u64) -> String {
    std::format!("batch-{}-{}-{}-{}", key.0, key.1, key.2, formed_at)
}

/// Group `transactions` (already filtered to `status=queued`, non-expired,
/// non-`wallet_setup` by [`super::model::TransactionStore::list_batchable`])
/// by `(priority, currency, destination-bucket)` and decide which groups
/// are ready to close into a [`TransactionBatch`].
///
/// A group of 2+ closes when it reaches `max_batch_size`, when
/// `max_wait_time_secs` has elapsed since its oldest member queued, or when
/// it contains a `critical`-priority member. A group of exactly 1 closes
/// only after `batch_timeout_secs` (the straggler path) so it doesn't wait
/// forever for a partner that never arrives.
pub fn form_batches(
    transactions: &[Transaction],
    now: u64,
    config: &Config,
) -> Vec<(TransactionBatch, Vec<String>)> {
    let mut groups: HashMap<(TransactionPriority, String, String), Vec<&Transaction>> =
        HashMap::new();
    for tx in transactions {
        groups.entry(tx.batch_key()).or_default().push(tx);
    }

    let mut batches = Vec::new();
    for (key, mut members) in groups {
        members.sort_by_key(|tx| tx.queued_at.unwrap_or(tx.created_at));
        let oldest = members
            .first()
            .and_then(|tx| tx.queued_at)
            .unwrap_or(now);
        let elapsed = now.saturating_sub(oldest);
        let has_critical = members
            .iter()
            .any(|tx| tx.priority == TransactionPriority::Critical);

        let ready = if members.len() == 1 {
            elapsed >= config.batch_timeout_secs
        } else {
            members.len() >= config.max_batch_size
                || elapsed >= config.max_wait_time_secs
                || has_critical
        };
        if !ready {
            continue;
        }

        for chunk in members.chunks(config.max_batch_size) {
            let transaction_ids: Vec<String> = chunk.iter().map(|tx| tx.id.clone()).collect();
            let batch = TransactionBatch {
                id: new_batch_id(&key, now),
                priority: key.0,
                status: BatchStatus::Forming,
                currency: key.1.clone(),
                destination_bucket: key.2.clone(),
                transaction_count: transaction_ids.len(),
                success_count: 0,
                failure_count: 0,
                transaction_ids: transaction_ids.clone(),
                formed_at: now,
                processed_at: None,
                completed_at: None,
            };
            batches.push((batch, transaction_ids));
        }
    }

    // Critical-priority batches drain first (spec.md §8 E4: "critical
    // drains first"); ties keep arrival order via the stable sort.
    batches.sort_by(|a, b| b.0.priority.cmp(&a.0.priority));
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::model::{now_unix_seconds, TransactionStatus, TransactionType, TxPayload};
    use crate::models::transactions::Payment;
    use crate::wallet::Wallet;
    use std::collections::HashMap as StdHashMap;
    use std::sync::Arc;

    fn wallet() -> Arc<Wallet> {
        Arc::new(Wallet::create(Some(crate::constants::CryptoAlgorithm::ED25519)).unwrap())
    }

    fn tx(
        id: &str,
        priority: TransactionPriority,
        to: &str,
        tx_type: TransactionType,
        queued_at: u64,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            tx_type,
            priority,
            status: TransactionStatus::Queued,
            from: "rFrom".to_string(),
            to: Some(to.to_string()),
            amount_drops: 1000,
            currency: "XRP".to_string(),
            fee_drops: 12,
            sequence: None,
            last_ledger_sequence: None,
            retry_count: 0,
            max_retries: 3,
            expires_at: now_unix_seconds() + 3600,
            last_error: None,
            submitted_tx_hash: None,
            confirmed_at: None,
            confirmed_ledger_index: None,
            metadata: StdHashMap::new(),
            payload: TxPayload::Payment(Payment::new(
                "rFrom".into(),
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                None,
                crate::models::amount::XRPAmount::from("1000").into(),
                to.to_string().into(),
                None,
                None,
                None,
                None,
                None,
            )),
            wallet: wallet(),
            created_at: queued_at,
            queued_at: Some(queued_at),
        }
    }

    #[test]
    fn no_batch_forms_from_a_single_normal_priority_transaction_before_timeout() {
        let config = Config::default();
        let now = now_unix_seconds();
        let transactions = std::vec![tx(
            "a",
            TransactionPriority::Normal,
            "rDest",
            TransactionType::Payment,
            now,
        )];
        let batches = form_batches(&transactions, now, &config);
        assert!(batches.is_empty());
    }

    #[test]
    fn a_straggler_closes_alone_after_batch_timeout() {
        let config = Config::default();
        let now = now_unix_seconds();
        let transactions = std::vec![tx(
            "a",
            TransactionPriority::Normal,
            "rDest",
            TransactionType::Payment,
            now - config.batch_timeout_secs - 1,
        )];
        let batches = form_batches(&transactions, now, &config);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].0.transaction_count, 1);
    }

    #[test]
    fn a_pair_closes_immediately_without_waiting_for_timeout() {
        let config = Config::default();
        let now = now_unix_seconds();
        let transactions = std::vec![
            tx("a", TransactionPriority::Normal, "rDest", TransactionType::Payment, now),
            tx("b", TransactionPriority::Normal, "rDest", TransactionType::Payment, now),
        ];
        let batches = form_batches(&transactions, now, &config);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].0.transaction_count, 2);
    }

    #[test]
    fn a_critical_member_closes_its_group_immediately() {
        let config = Config::default();
        let now = now_unix_seconds();
        let transactions = std::vec![
            tx("a", TransactionPriority::Critical, "rDest", TransactionType::Payment, now),
            tx("b", TransactionPriority::Critical, "rDest", TransactionType::Payment, now),
        ];
        // Two members already satisfies len>=2, so use members.len()==1 path
        // by isolating: a single critical transaction still needs a partner
        // under this grouping key to hit the "group of 2+" branch; combined
        // with a second critical arrival it closes on arrival, not on timeout.
        let batches = form_batches(&transactions, now, &config);
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].0.priority, TransactionPriority::Critical);
    }

    #[test]
    fn twenty_five_mixed_priority_transactions_form_at_most_three_batches_of_ten() {
        let config = Config::default();
        let now = now_unix_seconds();
        let mut transactions = Vec::new();
        let priorities = [
            TransactionPriority::Low,
            TransactionPriority::Normal,
            TransactionPriority::High,
            TransactionPriority::Critical,
        ];
        for i in 0..25 {
            let priority = priorities[i % priorities.len()];
            transactions.push(tx(
                &std::format!("tx-{i}"),
                priority,
                "rSameDestinationBucket",
                TransactionType::Payment,
                now,
            ));
        }

        // All 25 arrive at `now`: the Low(7)/Normal(6)/High(6) groups have
        // neither a full 10 members, elapsed time, nor a critical member, so
        // only the Critical(6) group is ready to close on this sweep.
        let batches = form_batches(&transactions, now, &config);
        assert!(batches.len() <= 3);
        for (batch, ids) in &batches {
            assert!(batch.transaction_count <= config.max_batch_size);
            assert_eq!(ids.len(), batch.transaction_count);
        }
        if let Some((first, _)) = batches.first() {
            assert_eq!(first.priority, TransactionPriority::Critical);
        }

        let total: usize = batches.iter().map(|(b, _)| b.transaction_count).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn wallet_setup_never_appears_because_the_store_excludes_it_upstream() {
        // form_batches trusts its input; the exclusion is enforced by
        // `TransactionStore::list_batchable` (spec.md §8 invariant 5), which
        // this pure function doesn't re-check. Document the contract here
        // so a future caller doesn't bypass the store.
        let config = Config::default();
        let now = now_unix_seconds();
        let mut wallet_setup_tx = tx(
            "ws",
            TransactionPriority::Normal,
            "rDest",
            TransactionType::WalletSetup,
            now,
        );
        wallet_setup_tx.tx_type = TransactionType::WalletSetup;
        let batches = form_batches(&[wallet_setup_tx], now, &config);
        // A lone member only closes via the straggler path, so this
        // assertion would fail only if the straggler timeout were zero.
        assert!(batches.is_empty());
    }
}
