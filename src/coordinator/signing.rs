//! The prepare -> sign -> encode pipeline the engine runs per transaction
//! before `submit` (spec.md §4.8 "Submission").
//!
//! Grounded on `asynch::transaction::{sign, prepare_transaction}`'s recipe
//! (set `SigningPubKey`, `encode_for_signing`, `core::keypairs::sign`,
//! `encode`), but writes the signature directly onto the transaction's own
//! `CommonFields` instead of going through that module's private
//! `PreparedTransaction`/`SignedTransaction` wrappers, whose `signing_pub_key`
//! (set to the account address rather than the public key hex) and
//! unexported `signature` field don't round-trip to a submittable blob.

use core::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::core::binarycodec::{encode, encode_for_signing};
use crate::core::keypairs::sign as keypairs_sign;
use crate::error::{CoreError, CoreResult};
use crate::models::transactions::Transaction as XrplTransaction;
use crate::wallet::Wallet;

/// Signs `transaction` in place and returns `(tx_blob_hex, tx_hash_hex)`.
pub fn sign_and_encode<'a, T, F>(
    transaction: &mut T,
    wallet: &Wallet,
) -> CoreResult<(std::string::String, std::string::String)>
where
    F: IntoEnumIterator + Serialize + Debug + PartialEq,
    T: XrplTransaction<'a, F> + Serialize + DeserializeOwned + Clone + Debug,
{
    transaction.get_mut_common_fields().signing_pub_key = Some(wallet.public_key.clone().into());

    let signing_blob = encode_for_signing(transaction)?;
    let signing_bytes = hex::decode(&signing_blob)
        .map_err(|e| CoreError::Internal(std::format!("undecodable signing blob: {e}")))?;
    let signature = keypairs_sign(&signing_bytes, &wallet.private_key)?;

    transaction.get_mut_common_fields().txn_signature = Some(signature.into());

    let tx_blob = encode(transaction)?;
    let hash = transaction
        .get_hash()
        .map_err(|e| CoreError::Internal(std::format!("{e}")))?
        .to_string();

    Ok((tx_blob, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CryptoAlgorithm;
    use crate::models::transactions::payment::Payment;

    #[test]
    fn signs_a_payment_and_produces_a_hex_blob() {
        let wallet = Wallet::create(Some(CryptoAlgorithm::ED25519)).unwrap();
        let mut payment = Payment::new(
            wallet.classic_address.clone().into(),
            None,
            Some(crate::models::amount::XRPAmount::from("12")),
            None,
            Some(4 + 20),
            None,
            Some(1),
            None,
            None,
            None,
            crate::models::amount::XRPAmount::from("1000").into(),
            "rDestinationAccount11111111".into(),
            None,
            None,
            None,
            None,
            None,
        );

        let (tx_blob, hash) = sign_and_encode(&mut payment, &wallet).unwrap();
        assert!(!tx_blob.is_empty());
        assert_eq!(hash.len(), 64);
    }
}
