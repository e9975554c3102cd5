use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::models::amount::XRPAmount;

/// Response from an account_channels request, containing information about
/// an account's Payment Channels. This includes only channels where the
/// specified account is the channel's source, not the destination.
///
/// See Account Channels:
/// `<https://xrpl.org/account_channels.html>`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccountChannels<'a> {
    /// The address of the source/owner of the payment channels.
    pub account: Cow<'a, str>,
    /// Payment channels owned by this account.
    pub channels: Cow<'a, [Channel<'a>]>,
    /// The identifying Hash of the ledger version used to generate this
    /// response.
    pub ledger_hash: Option<Cow<'a, str>>,
    /// The Ledger Index of the ledger version used to generate this response.
    pub ledger_index: u32,
    /// If true, the information comes from a validated ledger version.
    pub validated: bool,
    /// The limit to how many channel objects were actually returned by this
    /// request.
    pub limit: Option<u32>,
    /// Server-defined value for pagination. Pass this to the next call to
    /// resume getting results where this call left off.
    pub marker: Option<Cow<'a, str>>,
}

/// Represents a single payment channel object in the XRP Ledger.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Channel<'a> {
    /// The owner of the channel, as an Address.
    pub account: Cow<'a, str>,
    /// The total amount of XRP, in drops allocated to this channel.
    pub amount: XRPAmount<'a>,
    /// The total amount of XRP, in drops, paid out from this channel.
    pub balance: XRPAmount<'a>,
    /// A unique ID for this channel, as a 64-character hexadecimal string.
    pub channel_id: Cow<'a, str>,
    /// The destination account of the channel, as an Address.
    pub destination_account: Cow<'a, str>,
    /// The public key for the payment channel in the XRP Ledger's
    /// base58 format.
    pub public_key: Option<Cow<'a, str>>,
    /// The public key for the payment channel in hexadecimal format.
    pub public_key_hex: Option<Cow<'a, str>>,
    /// The number of seconds the payment channel must stay open after the
    /// owner requests to close it.
    pub settle_delay: u64,
    /// Time, in seconds since the Ripple Epoch, when this channel is set
    /// to expire.
    pub expiration: Option<u64>,
    /// Time, in seconds since the Ripple Epoch, of this channel's immutable
    /// expiration.
    pub cancel_after: Option<u64>,
    /// A 32-bit unsigned integer to use as a source tag for payments through
    /// this channel.
    pub source_tag: Option<u32>,
    /// A 32-bit unsigned integer to use as a destination tag for payments
    /// through this channel.
    pub destination_tag: Option<u32>,
}
