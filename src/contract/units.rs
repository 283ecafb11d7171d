//! Ether and wei conversion

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::U256;
use rust_decimal::Decimal;
use thiserror::Error;

/// Fractional digits of one ether in wei
pub const ETHER_DECIMALS: u32 = 18;

/// Unit conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitError {
    #[error("negative amount: {0}")]
    Negative(Decimal),
    #[error("more than 18 fractional digits: {0}")]
    TooPrecise(Decimal),
    #[error("amount out of range")]
    Overflow,
}

/// Ether amount to wei
///
/// Precision is checked on the decimal itself, so an amount carrying more
/// than 18 fractional digits is rejected rather than rounded.
pub fn to_wei(ether: Decimal) -> Result<U256, UnitError> {
    if ether.is_sign_negative() && !ether.is_zero() {
        return Err(UnitError::Negative(ether));
    }
    let ether = ether.normalize();
    if ether.scale() > ETHER_DECIMALS {
        return Err(UnitError::TooPrecise(ether));
    }
    parse_ether(&ether.to_string()).map_err(|_| UnitError::Overflow)
}

/// Wei amount to ether
pub fn from_wei(wei: U256) -> Result<Decimal, UnitError> {
    Decimal::from_str_exact(&format_ether(wei))
        .map(|d| d.normalize())
        .map_err(|_| UnitError::Overflow)
}
