use crate::models::ledger::LedgerEntryType;
use crate::models::Model;
use alloc::borrow::Cow;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use serde_with::skip_serializing_none;

/// The `DirectoryNode` object type provides a list of links to other objects in the ledger's state
/// tree. A single conceptual Directory　takes the form of a doubly linked list, with one or more
/// `DirectoryNode` objects each containing up to 32 IDs of other objects. The first object is called
/// the root of the directory, and all objects other than the root object can be added or deleted
/// as necessary.
///
/// There are two kinds of Directories:
/// - `Owner` directories list other objects owned by an account, such as `RippleState` (trust line)
/// or `Offer` objects.
/// - `Offer` directories list the offers available in the decentralized exchange. A single `Offer`
/// directory contains all the offers that have the same exchange rate for the same token.
///
/// `<https://xrpl.org/directorynode.html#directorynode>`
#[skip_serializing_none]
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "PascalCase")]
pub struct DirectoryNode<'a> {
    /// The value 0x0064, mapped to the string `DirectoryNode`, indicates that this object is part
    /// of a Directory.
    pub ledger_entry_type: LedgerEntryType,
    /// A bit-map of boolean flags enabled for this object. Currently, the protocol defines no flags
    /// for `DirectoryNode` objects. The value is always 0.
    pub flags: u32,
    /// The object ID of a single object to retrieve from the ledger, as a
    /// 64-character (256-bit) hexadecimal string.
    #[serde(rename = "index")]
    pub index: Cow<'a, str>,
    /// (`Offer` Directories only) DEPRECATED. Do not use.
    pub exchange_rate: Option<Cow<'a, str>>,
    /// The contents of this `Directory`: an array of IDs of other objects.
    pub indexes: Vec<Cow<'a, str>>,
    /// If this `Directory` consists of multiple pages, this ID links to the next object in the chain,
    /// wrapping around at the end.
    pub index_next: Option<u64>,
    /// If this `Directory` consists of multiple pages, this ID links to the previous object in the
    /// chain, wrapping around at the beginning.
    pub index_previous: Option<u64>,
    /// (Owner Directories only) The address of the account that owns the objects in this directory.
    pub owner: Option<Cow<'a, str>>,
    /// The ID of root object for this directory.
    pub root_index: Cow<'a, str>,
    /// (`Offer` `Directories` only) The currency code of the `TakerGets` amount from the offers in this
    /// directory.
    pub taker_gets_currency: Option<Cow<'a, str>>,
    /// (`Offer` `Directories` only) The issuer of the `TakerGets` amount from the offers in this
    /// directory.
    pub taker_gets_issuer: Option<Cow<'a, str>>,
    /// (`Offer` `Directories` only) The currency code of the `TakerPays` amount from the offers in this
    /// directory.
    pub taker_pays_currency: Option<Cow<'a, str>>,
    /// (`Offer` `Directories` only) The issuer of the `TakerPays` amount from the offers in this
    /// directory.
    pub taker_pays_issuer: Option<Cow<'a, str>>,
}

impl<'a> Default for DirectoryNode<'a> {
    fn default() -> Self {
        Self {
            ledger_entry_type: LedgerEntryType::DirectoryNode,
            flags: Default::default(),
            index: Default::default(),
            exchange_rate: Default::default(),
            indexes: Default::default(),
            index_next: Default::default(),
            index_previous: Default::default(),
            owner: Default::default(),
            root_index: Default::default(),
            taker_gets_currency: Default::default(),
            taker_gets_issuer: Default::default(),
            taker_pays_currency: Default::default(),
            taker_pays_issuer: Default::default(),
        }
    }
}

impl<'a> Model for DirectoryNode<'a> {}

impl<'a> DirectoryNode<'a> {
    pub fn new(
        index: Cow<'a, str>,
        indexes: Vec<Cow<'a, str>>,
        root_index: Cow<'a, str>,
        exchange_rate: Option<Cow<'a, str>>,
        index_next: Option<u64>,
        index_previous: Option<u64>,
        owner: Option<Cow<'a, str>>,
        taker_gets_currency: Option<Cow<'a, str>>,
        taker_gets_issuer: Option<Cow<'a, str>>,
        taker_pays_currency: Option<Cow<'a, str>>,
        taker_pays_issuer: Option<Cow<'a, str>>,
    ) -> Self {
        Self {
            ledger_entry_type: LedgerEntryType::DirectoryNode,
            flags: 0,
            index,
            exchange_rate,
            indexes,
            index_next,
            index_previous,
            owner,
            root_index,
            taker_gets_currency,
            taker_gets_issuer,
            taker_pays_currency,
            taker_pays_issuer,
        }
    }
}
