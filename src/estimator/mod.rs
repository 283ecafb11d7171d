//! Donation return estimator
//!
//! Projects simple interest on a deposit from a fixed, tiered daily-rate
//! table. Pure and synchronous: the same request always yields the same
//! result.

mod tiers;
mod types;

pub use tiers::{find_tier, RATE_TIERS};
pub use types::{EstimateError, EstimateRequest, EstimateResult, RateTier};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Estimator over a static tier table
#[derive(Debug, Clone, Copy)]
pub struct TieredEstimator {
    tiers: &'static [RateTier],
}

impl TieredEstimator {
    /// Create an estimator over the standard schedule
    pub fn new() -> Self {
        Self { tiers: &RATE_TIERS }
    }

    /// Tiers this estimator applies
    pub fn tiers(&self) -> &'static [RateTier] {
        self.tiers
    }

    /// Project the return for a validated request
    ///
    /// `amount * days * rate / 100`, rounded half away from zero to two
    /// fractional digits.
    pub fn estimate(&self, request: &EstimateRequest) -> Result<EstimateResult, EstimateError> {
        let tier = find_tier(self.tiers, request.amount).ok_or(EstimateError::OutOfRange)?;

        let mut projected = (request.amount
            * Decimal::from(request.duration_days)
            * tier.daily_rate_percent
            / dec!(100))
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        projected.rescale(2);

        Ok(EstimateResult {
            amount: request.amount,
            duration_days: request.duration_days,
            daily_rate_percent: tier.daily_rate_percent,
            projected_return: projected,
        })
    }

    /// Parse the two form inputs and project the return
    pub fn estimate_str(&self, amount: &str, days: &str) -> Result<EstimateResult, EstimateError> {
        let request = EstimateRequest::parse(amount, days)?;
        self.estimate(&request)
    }
}

impl Default for TieredEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Project the return for text inputs using the standard schedule
pub fn estimate(amount: &str, days: &str) -> Result<EstimateResult, EstimateError> {
    TieredEstimator::new().estimate_str(amount, days)
}
