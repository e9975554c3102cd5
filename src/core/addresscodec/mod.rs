//! This module contains commonly-used constants.

pub mod exceptions;
#[cfg(test)]
pub mod test_cases;
pub mod utils;

use crate::constants::CryptoAlgorithm;
use crate::core::addresscodec::exceptions::XRPLAddressCodecException;
use crate::core::addresscodec::utils::*;
use crate::skip_err;
use alloc::string::String;
use alloc::vec::Vec;
use core::convert::TryInto;
use strum::IntoEnumIterator;

use super::exceptions::XRPLCoreResult;

/// Map the algorithm to the prefix.
fn _algorithm_to_prefix<'a>(algo: &CryptoAlgorithm) -> &'a [u8] {
    match algo {
        CryptoAlgorithm::ED25519 => &ED25519_SEED_PREFIX,
        CryptoAlgorithm::SECP256K1 => &FAMILY_SEED_PREFIX,
    }
}

/// Returns whether a decoded X-Address is a test address.
fn _is_test_address(prefix: &[u8]) -> XRPLCoreResult<bool> {
    if ADDRESS_PREFIX_BYTES_MAIN == prefix {
        Ok(false)
    } else if ADDRESS_PREFIX_BYTES_TEST == prefix {
        Ok(true)
    } else {
        Err(XRPLAddressCodecException::InvalidXAddressPrefix.into())
    }
}

/// Returns the destination tag extracted from the suffix
/// of the X-Address.
fn _get_tag_from_buffer(buffer: &[u8]) -> XRPLCoreResult<Option<u64>> {
    let flag = &buffer[0];

    if flag >= &2 {
        Err(XRPLAddressCodecException::UnsupportedXAddress.into())
    } else if flag == &1 {
        // Little-endian to big-endian
        Ok(Some(
            buffer[1] as u64
                + buffer[2] as u64 * 0x100
                + buffer[3] as u64 * 0x10000
                + buffer[4] as u64 * 0x1000000,
        ))
        // inverse of what happens in encode
    } else if flag != &0 {
        Err(XRPLAddressCodecException::InvalidXAddressZeroNoTag.into())
    } else if hex::decode("0000000000000000")? != buffer[1..9] {
        Err(XRPLAddressCodecException::InvalidXAddressZeroRemain.into())
    } else {
        Ok(None)
    }
}

/// Returns an encoded seed.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::encode_seed;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::constants::CryptoAlgorithm;
/// use xrpl::core::addresscodec::utils::SEED_LENGTH;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let entropy: [u8; SEED_LENGTH] = [
///     207, 45, 227, 120, 251, 221, 126, 46, 232,
///     125, 72, 109, 251, 90, 123, 255
/// ];
/// let encoding_type: CryptoAlgorithm = CryptoAlgorithm::SECP256K1;
/// let seed: String = "sn259rEFXrQrWyx3Q7XneWcwV6dfL".into();
///
/// let encoding: Option<String> = match encode_seed(
///     entropy,
///     encoding_type,
/// ) {
///     Ok(seed) => Some(seed),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnknownSeedEncoding) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(seed), encoding);
/// ```
pub fn encode_seed(
    entropy: [u8; SEED_LENGTH],
    encoding_type: CryptoAlgorithm,
) -> XRPLCoreResult<String> {
    Ok(encode_base58(
        &entropy,
        _algorithm_to_prefix(&encoding_type),
        Some(SEED_LENGTH),
    )?)
}

/// Returns an encoded seed.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::decode_seed;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::addresscodec::utils::SEED_LENGTH;
/// use xrpl::constants::CryptoAlgorithm;
/// use xrpl::core::exceptions::XRPLCoreException;
/// extern crate alloc;
/// use alloc::vec;
///
/// let seed: &str = "sn259rEFXrQrWyx3Q7XneWcwV6dfL";
/// let tuple: ([u8; SEED_LENGTH], CryptoAlgorithm) = (
///     [207, 45, 227, 120, 251, 221, 126, 46, 232, 125, 72, 109, 251, 90, 123, 255],
///     CryptoAlgorithm::SECP256K1,
/// );
///
/// let decoding: Option<([u8; SEED_LENGTH], CryptoAlgorithm)> = match decode_seed(seed) {
///     Ok((bytes, algorithm)) => Some((bytes, algorithm)),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnknownSeedEncoding) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(tuple), decoding);
/// ```
pub fn decode_seed(seed: &str) -> XRPLCoreResult<([u8; SEED_LENGTH], CryptoAlgorithm)> {
    let mut result: Option<XRPLCoreResult<Vec<u8>>> = None;
    let mut algo: Option<CryptoAlgorithm> = None;

    for a in CryptoAlgorithm::iter() {
        let decode = decode_base58(seed, _algorithm_to_prefix(&a));
        result = Some(skip_err!(decode));
        algo = Some(a);
    }

    match result {
        Some(Ok(val)) => {
            let decoded: [u8; SEED_LENGTH] = val
                .try_into()
                .map_err(|err| XRPLAddressCodecException::VecResizeError(err))?;
            Ok((decoded, algo.expect("decode_seed")))
        }
        Some(Err(_)) | None => Err(XRPLAddressCodecException::UnknownSeedEncoding.into()),
    }
}

/// Returns the X-Address representation of the data.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::classic_address_to_xaddress;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let classic_address: &str = "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59".into();
/// let tag: Option<u64> = None;
/// let is_test_network: bool = false;
/// let xaddress: String = "X7AcgcsBL6XDcUb289X4mJ8djcdyKaB5hJDWMArnXr61cqZ".into();
///
/// let conversion: Option<String> = match classic_address_to_xaddress(
///         classic_address,
///         tag,
///         is_test_network
/// ) {
///     Ok(address) => Some(address),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressPrefix) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnsupportedXAddress) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressZeroNoTag) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressZeroRemain) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnexpectedPayloadLength {
///             expected: _,
///             found: _,
///         }) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(xaddress), conversion);
/// ```
pub fn classic_address_to_xaddress(
    classic_address: &str,
    tag: Option<u64>,
    is_test_network: bool,
) -> XRPLCoreResult<String> {
    let classic_address_bytes = decode_classic_address(classic_address)?;
    let flag: bool = tag.is_some();
    let tag_val: u64;

    if classic_address_bytes.len() != CLASSIC_ADDRESS_ID_LENGTH {
        Err(XRPLAddressCodecException::InvalidCAddressIdLength {
            length: CLASSIC_ADDRESS_ID_LENGTH,
        }
        .into())
    } else if tag.is_some() && tag > Some(u32::MAX.into()) {
        Err(XRPLAddressCodecException::InvalidCAddressTag.into())
    } else {
        if let Some(tval) = tag {
            tag_val = tval;
        } else {
            tag_val = 0;
        }

        let mut bytestring = match is_test_network {
            true => ADDRESS_PREFIX_BYTES_TEST,
            false => ADDRESS_PREFIX_BYTES_MAIN,
        }
        .to_vec();

        bytestring.extend_from_slice(&classic_address_bytes);

        let encoded_tag = [
            flag as u8,
            (tag_val & 0xFF) as u8,
            (tag_val >> 8 & 0xFF) as u8,
            (tag_val >> 16 & 0xFF) as u8,
            (tag_val >> 24 & 0xFF) as u8,
            0,
            0,
            0,
            0,
        ];

        bytestring.extend_from_slice(&encoded_tag);

        Ok(bs58::encode(bytestring)
            .with_alphabet(&XRPL_ALPHABET)
            .with_check()
            .into_string())
    }
}

/// Returns a tuple containing the classic address, tag,
/// and whether the address is on a test network for an
/// X-Address.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::xaddress_to_classic_address;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let xaddress: &str = "X7AcgcsBL6XDcUb289X4mJ8djcdyKaB5hJDWMArnXr61cqZ";
/// let classic: (String, Option<u64>, bool) = (
///     "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59".into(),
///     None,
///     false,
/// );
///
/// let conversion: Option<(String, Option<u64>, bool)> = match xaddress_to_classic_address(xaddress) {
///     Ok((address, tag, is_test_network)) => Some((address, tag, is_test_network)),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressPrefix) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnsupportedXAddress) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressZeroNoTag) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidXAddressZeroRemain) => None,
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnexpectedPayloadLength {
///             expected: _,
///             found: _,
///         }) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(classic), conversion);
/// ```
pub fn xaddress_to_classic_address(xaddress: &str) -> XRPLCoreResult<(String, Option<u64>, bool)> {
    // Convert b58 to bytes
    let decoded = bs58::decode(xaddress)
        .with_alphabet(&XRPL_ALPHABET)
        .with_check(None)
        .into_vec()?;

    let is_test_network = _is_test_address(&decoded[..2])?;
    let classic_address_bytes = &decoded[2..22];
    // extracts the destination tag
    let tag = _get_tag_from_buffer(&decoded[22..])?;

    let classic_address = encode_classic_address(classic_address_bytes)?;
    Ok((classic_address, tag, is_test_network))
}

/// Returns the classic address encoding of these bytes
/// as a base58 string.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::encode_classic_address;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let bytes: &[u8] = &[
///     94, 123, 17, 37, 35, 246, 141, 47, 94, 135, 157, 180,
///     234, 197, 28, 102, 152, 166, 147, 4
/// ];
/// let address: String = "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59".into();
///
/// let encoding: Option<String> = match encode_classic_address(bytes) {
///     Ok(address) => Some(address),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnexpectedPayloadLength {
///             expected: _,
///             found: _,
///         }) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(address), encoding);
/// ```
pub fn encode_classic_address(bytestring: &[u8]) -> XRPLCoreResult<String> {
    Ok(encode_base58(
        bytestring,
        &CLASSIC_ADDRESS_PREFIX,
        Some(CLASSIC_ADDRESS_LENGTH.into()),
    )?)
}

/// Returns the decoded bytes of the classic address.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::decode_classic_address;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
/// extern crate alloc;
/// use alloc::vec;
///
/// let key: &str = "r9cZA1mLK5R5Am25ArfXFmqgNwjZgnfk59";
/// let bytes: Vec<u8> = vec![
///     94, 123, 17, 37, 35, 246, 141, 47, 94, 135, 157, 180,
///     234, 197, 28, 102, 152, 166, 147, 4
/// ];
///
/// let decoding: Option<Vec<u8>> = match decode_classic_address(key) {
///     Ok(bytes) => Some(bytes),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidEncodingPrefixLength) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(bytes), decoding);
/// ```
pub fn decode_classic_address(classic_address: &str) -> XRPLCoreResult<Vec<u8>> {
    Ok(decode_base58(classic_address, &CLASSIC_ADDRESS_PREFIX)?)
}

/// Returns the node public key encoding of these bytes
/// as a base58 string.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::encode_node_public_key;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let bytes: &[u8] = &[
///     3, 136, 229, 186, 135, 160, 0, 203, 128, 114, 64, 223,
///     140, 132, 142, 176, 181, 255, 165, 200, 229, 165, 33,
///     188, 142, 16, 92, 15, 10, 68, 33, 120, 40
/// ];
/// let key: String = "n9MXXueo837zYH36DvMc13BwHcqtfAWNJY5czWVbp7uYTj7x17TH".into();
///
/// let encoding: Option<String> = match encode_node_public_key(bytes) {
///     Ok(key) => Some(key),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnexpectedPayloadLength {
///             expected: _,
///             found: _,
///         }) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(key), encoding);
/// ```
pub fn encode_node_public_key(bytestring: &[u8]) -> XRPLCoreResult<String> {
    Ok(encode_base58(
        bytestring,
        &NODE_PUBLIC_KEY_PREFIX,
        Some(NODE_PUBLIC_KEY_LENGTH.into()),
    )?)
}

/// Returns the decoded bytes of the node public key.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::decode_node_public_key;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
/// extern crate alloc;
/// use alloc::vec;
///
/// let key: &str = "n9MXXueo837zYH36DvMc13BwHcqtfAWNJY5czWVbp7uYTj7x17TH";
/// let bytes: Vec<u8> = vec![
///     3, 136, 229, 186, 135, 160, 0, 203, 128, 114, 64, 223,
///     140, 132, 142, 176, 181, 255, 165, 200, 229, 165, 33,
///     188, 142, 16, 92, 15, 10, 68, 33, 120, 40
/// ];
///
/// let decoding: Option<Vec<u8>> = match decode_node_public_key(key) {
///     Ok(bytes) => Some(bytes),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidEncodingPrefixLength) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(bytes), decoding);
/// ```
pub fn decode_node_public_key(node_public_key: &str) -> XRPLCoreResult<Vec<u8>> {
    Ok(decode_base58(node_public_key, &NODE_PUBLIC_KEY_PREFIX)?)
}

/// Returns the account public key encoding of these
/// bytes as a base58 string.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::encode_account_public_key;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
///
/// let bytes: &[u8] = &[
///     2, 54, 147, 241, 89, 103, 174, 53, 125, 3, 39, 151,
///     74, 212, 111, 227, 193, 39, 17, 59, 17, 16, 214, 4,
///     79, 212, 30, 114, 54, 137, 248, 28, 198
/// ];
/// let key: String = "aB44YfzW24VDEJQ2UuLPV2PvqcPCSoLnL7y5M1EzhdW4LnK5xMS3".into();
///
/// let encoding: Option<String> = match encode_account_public_key(bytes) {
///     Ok(key) => Some(key),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::UnexpectedPayloadLength {
///             expected: _,
///             found: _,
///         }) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(key), encoding);
/// ```
pub fn encode_account_public_key(bytestring: &[u8]) -> XRPLCoreResult<String> {
    Ok(encode_base58(
        bytestring,
        &ACCOUNT_PUBLIC_KEY_PREFIX,
        Some(ACCOUNT_PUBLIC_KEY_LENGTH.into()),
    )?)
}

/// Returns the decoded bytes of the node public key.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::decode_account_public_key;
/// use xrpl::core::addresscodec::exceptions::XRPLAddressCodecException;
/// use xrpl::core::exceptions::XRPLCoreException;
/// extern crate alloc;
/// use alloc::vec;
///
/// let key: &str = "aB44YfzW24VDEJQ2UuLPV2PvqcPCSoLnL7y5M1EzhdW4LnK5xMS3";
/// let bytes: Vec<u8> = vec![
///     2, 54, 147, 241, 89, 103, 174, 53, 125, 3, 39, 151,
///     74, 212, 111, 227, 193, 39, 17, 59, 17, 16, 214, 4,
///     79, 212, 30, 114, 54, 137, 248, 28, 198
/// ];
///
/// let decoding: Option<Vec<u8>> = match decode_account_public_key(key) {
///     Ok(bytes) => Some(bytes),
///     Err(e) => match e {
///         XRPLCoreException::XRPLAddressCodecError(XRPLAddressCodecException::InvalidEncodingPrefixLength) => None,
///         _ => None,
///     }
/// };
///
/// assert_eq!(Some(bytes), decoding);
/// ```
pub fn decode_account_public_key(account_public_key: &str) -> XRPLCoreResult<Vec<u8>> {
    Ok(decode_base58(
        account_public_key,
        &ACCOUNT_PUBLIC_KEY_PREFIX,
    )?)
}

/// Returns whether `classic_address` is a valid classic address.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::is_valid_classic_address;
///
/// let address: &str = "rpGaCyHRYbgKhErgFih3RdjJqXDsYBouz3";
///
/// assert!(is_valid_classic_address(address));
/// ```
pub fn is_valid_classic_address(classic_address: &str) -> bool {
    decode_base58(classic_address, &CLASSIC_ADDRESS_PREFIX).is_ok()
}

/// Returns whether ``xaddress`` is a valid X-Address.
///
/// # Examples
///
/// ## Basic usage
///
/// ```
/// use xrpl::core::addresscodec::is_valid_xaddress;
///
/// let address: &str = "X7AcgcsBL6XDcUb289X4mJ8djcdyKaB5hJDWMArnXr61cqZ";
///
/// assert!(is_valid_xaddress(address));
/// ```
pub fn is_valid_xaddress(xaddress: &str) -> bool {
    xaddress_to_classic_address(xaddress).is_ok()
}
