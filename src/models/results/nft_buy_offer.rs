use alloc::{borrow::Cow, string::ToString, vec::Vec};
use serde::{Deserialize, Serialize};

use crate::models::{requests::Marker, XRPLModelException, XRPLModelResult};

use super::{exceptions::XRPLResultException, NftOffer, XRPLResponse, XRPLResult};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NFTBuyOffer<'a> {
    pub offers: Vec<NftOffer<'a>>,
    pub nft_id: Cow<'a, str>,
    pub limit: Option<u32>,
    pub marker: Option<Marker<'a>>,
}

impl<'a> TryFrom<XRPLResult<'a>> for NFTBuyOffer<'a> {
    type Error = XRPLModelException;

    fn try_from(result: XRPLResult<'a>) -> XRPLModelResult<Self> {
        match result {
            XRPLResult::NFTBuyOffer(nft_buy_offer) => Ok(nft_buy_offer),
            res => Err(XRPLResultException::UnexpectedResultType(
                "NFTBuyOffer".to_string(),
                res.get_name(),
            )
            .into()),
        }
    }
}

impl<'a> TryFrom<XRPLResponse<'a>> for NFTBuyOffer<'a> {
    type Error = XRPLModelException;

    fn try_from(response: XRPLResponse<'a>) -> XRPLModelResult<Self> {
        match response.result {
            Some(result) => NFTBuyOffer::try_from(result),
            None => Err(XRPLModelException::MissingField("result".to_string())),
        }
    }
}
