//! Referrer selection for deposits

use crate::wallet::{AccountAddress, AddressError};

/// Referrer a deposit should credit
///
/// Once a referrer has been used it is reused for every later deposit.
/// Before that, the entered referrer wins, falling back to `default` when
/// nothing was entered.
pub fn resolve_referrer(
    previous: Option<AccountAddress>,
    entered: &str,
    default: AccountAddress,
) -> Result<AccountAddress, AddressError> {
    if let Some(previous) = previous {
        return Ok(previous);
    }
    let entered = entered.trim();
    if entered.is_empty() {
        return Ok(default);
    }
    entered.parse()
}
