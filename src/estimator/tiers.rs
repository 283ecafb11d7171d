//! Fixed daily-rate schedule

use super::RateTier;
use rust_decimal::Decimal;

const fn units(value: u32, scale: u32) -> Decimal {
    Decimal::from_parts(value, 0, 0, false, scale)
}

/// Daily rate tiers in ascending amount order
pub const RATE_TIERS: [RateTier; 3] = [
    RateTier {
        lower_bound: units(1, 0),
        upper_bound: units(500, 0),
        daily_rate_percent: units(40, 1),
    },
    RateTier {
        lower_bound: units(501, 0),
        upper_bound: units(5000, 0),
        daily_rate_percent: units(42, 1),
    },
    RateTier {
        lower_bound: units(5001, 0),
        upper_bound: units(20000, 0),
        daily_rate_percent: units(45, 1),
    },
];

/// First tier, in ascending order, whose inclusive bounds hold the amount
pub fn find_tier(tiers: &[RateTier], amount: Decimal) -> Option<&RateTier> {
    tiers.iter().find(|tier| tier.contains(amount))
}
