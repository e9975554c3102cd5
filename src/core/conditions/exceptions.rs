//! Crypto-condition codec exceptions.

#[derive(Debug)]
#[non_exhaustive]
pub enum XRPLConditionException {
    InvalidPreimageLength { expected: usize, found: usize },
    InvalidDerTag { expected: u8, found: u8 },
    Truncated,
    HexError(hex::FromHexError),
}

impl From<hex::FromHexError> for XRPLConditionException {
    fn from(err: hex::FromHexError) -> Self {
        XRPLConditionException::HexError(err)
    }
}

#[cfg(feature = "std")]
impl alloc::error::Error for XRPLConditionException {}

#[cfg(feature = "std")]
impl alloc::fmt::Display for XRPLConditionException {
    fn fmt(&self, f: &mut alloc::fmt::Formatter<'_>) -> alloc::fmt::Result {
        write!(f, "XRPLConditionException: {:?}", self)
    }
}
