//! Referral module
//!
//! Captures the `?ref=` referrer from the page location and decides which
//! referrer a deposit credits.

mod location;
mod policy;

pub use location::{NoLocation, StaticLocation};
pub use policy::resolve_referrer;

use crate::wallet::AccountAddress;

/// Query parameter carrying the referrer address
pub const REFERRER_PARAM: &str = "ref";

/// Read access to the query parameters of the current location
pub trait LocationQuery: Send + Sync {
    /// Value of the first parameter named `key`
    fn get(&self, key: &str) -> Option<String>;
}

/// Referrer address from the location, if present and well formed
pub fn read_referrer(location: &dyn LocationQuery) -> Option<AccountAddress> {
    let raw = location.get(REFERRER_PARAM)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(address) => {
            tracing::info!(referrer = %address, "Referrer from location");
            Some(address)
        }
        Err(e) => {
            tracing::warn!(value = raw, error = %e, "Ignoring malformed referrer parameter");
            None
        }
    }
}
