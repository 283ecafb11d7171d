//! Estimator types

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Estimator errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Amount or days is non-numeric, zero or negative
    #[error("Please enter a valid investment amount and number of days.")]
    InvalidInput,
    /// Positive amount that no rate tier covers
    #[error("Investment amount is outside the supported range.")]
    OutOfRange,
}

/// A validated estimate request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateRequest {
    /// Amount to deposit
    pub amount: Decimal,
    /// Number of whole days the deposit accrues
    pub duration_days: u32,
}

impl EstimateRequest {
    /// Create a request, rejecting non-positive values
    pub fn new(amount: Decimal, duration_days: u32) -> Result<Self, EstimateError> {
        if amount <= Decimal::ZERO || duration_days == 0 {
            return Err(EstimateError::InvalidInput);
        }
        Ok(Self {
            amount,
            duration_days,
        })
    }

    /// Parse a request from the two text inputs of the calculator form
    ///
    /// Days are read as a leading integer, so `"2.9"` means two days, `"1e3"`
    /// means one day and `"0.5"` is rejected. An amount that is a finite
    /// positive number but not representable as a `Decimal` is out of range.
    /// Invalid days take precedence over an out-of-range amount.
    pub fn parse(amount: &str, duration_days: &str) -> Result<Self, EstimateError> {
        let amount = parse_amount(amount);
        let days = parse_days(duration_days)?;
        Self::new(amount?, days)
    }

    /// Build a request from floating point inputs
    pub fn from_f64(amount: f64, duration_days: f64) -> Result<Self, EstimateError> {
        if !duration_days.is_finite() || duration_days < 1.0 {
            return Err(EstimateError::InvalidInput);
        }
        let days = duration_days.trunc();
        if days > f64::from(u32::MAX) {
            return Err(EstimateError::InvalidInput);
        }
        if !amount.is_finite() || amount <= 0.0 {
            return Err(EstimateError::InvalidInput);
        }
        let amount = match Decimal::from_f64(amount) {
            Some(amount) if amount > Decimal::ZERO => amount,
            _ => return Err(EstimateError::OutOfRange),
        };
        Self::new(amount, days as u32)
    }
}

fn parse_amount(input: &str) -> Result<Decimal, EstimateError> {
    let input = input.trim();
    let parsed = Decimal::from_str(input).or_else(|_| Decimal::from_scientific(input));
    match parsed {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        // Too large, or so small it rounds to zero
        _ if is_finite_positive(input) => Err(EstimateError::OutOfRange),
        _ => Err(EstimateError::InvalidInput),
    }
}

fn is_finite_positive(input: &str) -> bool {
    input
        .parse::<f64>()
        .is_ok_and(|value| value.is_finite() && value > 0.0)
}

/// Leading integer of the input; anything after the digits is ignored
fn parse_days(input: &str) -> Result<u32, EstimateError> {
    let input = input.trim();
    if input.starts_with('-') {
        return Err(EstimateError::InvalidInput);
    }
    let unsigned = input.strip_prefix('+').unwrap_or(input);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..end].parse::<u32>() {
        Ok(days) if days > 0 => Ok(days),
        _ => Err(EstimateError::InvalidInput),
    }
}

/// An inclusive amount range mapped to a daily rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateTier {
    /// Smallest amount in the tier
    pub lower_bound: Decimal,
    /// Largest amount in the tier
    pub upper_bound: Decimal,
    /// Daily rate in percent (4.2 means 4.2% per day)
    pub daily_rate_percent: Decimal,
}

impl RateTier {
    /// Whether the amount falls inside this tier, bounds included
    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.lower_bound && amount <= self.upper_bound
    }
}

/// Projected return for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateResult {
    pub amount: Decimal,
    pub duration_days: u32,
    pub daily_rate_percent: Decimal,
    /// Return over the whole duration, always carrying two fractional digits
    pub projected_return: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_valid() {
        let req = EstimateRequest::parse("1000", "30").unwrap();
        assert_eq!(req.amount, dec!(1000));
        assert_eq!(req.duration_days, 30);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let req = EstimateRequest::parse(" 250.5 ", "\t7\n").unwrap();
        assert_eq!(req.amount, dec!(250.5));
        assert_eq!(req.duration_days, 7);
    }

    #[test]
    fn test_parse_truncates_fractional_days() {
        let req = EstimateRequest::parse("100", "2.9").unwrap();
        assert_eq!(req.duration_days, 2);
    }

    #[test]
    fn test_parse_fraction_of_a_day_rejected() {
        assert_eq!(
            EstimateRequest::parse("100", "0.5"),
            Err(EstimateError::InvalidInput)
        );
    }

    #[test]
    fn test_parse_scientific_amount() {
        let req = EstimateRequest::parse("1e3", "1").unwrap();
        assert_eq!(req.amount, dec!(1000));
    }

    #[test]
    fn test_parse_days_reads_leading_integer() {
        for (days, expected) in [("1e3", 1), ("2.9", 2), ("+7", 7), ("12 days", 12)] {
            let req = EstimateRequest::parse("100", days).unwrap();
            assert_eq!(req.duration_days, expected, "days={days:?}");
        }
    }

    #[test]
    fn test_parse_unrepresentable_amounts_out_of_range() {
        for amount in [
            "1e30",
            "100000000000000000000000000000",
            "0.00000000000000000000000000001",
            "1e-40",
        ] {
            assert_eq!(
                EstimateRequest::parse(amount, "1"),
                Err(EstimateError::OutOfRange),
                "amount={amount:?}"
            );
        }
    }

    #[test]
    fn test_parse_invalid_days_win_over_out_of_range() {
        assert_eq!(
            EstimateRequest::parse("1e30", "0"),
            Err(EstimateError::InvalidInput)
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for (amount, days) in [
            ("abc", "10"),
            ("100", "ten"),
            ("", "10"),
            ("100", ""),
            ("0", "10"),
            ("-5", "10"),
            ("100", "0"),
            ("100", "-3"),
            ("100", "e3"),
            ("100", "."),
            ("inf", "10"),
            ("NaN", "10"),
            ("-1e30", "10"),
        ] {
            assert_eq!(
                EstimateRequest::parse(amount, days),
                Err(EstimateError::InvalidInput),
                "amount={amount:?} days={days:?}"
            );
        }
    }

    #[test]
    fn test_parse_days_overflow_rejected() {
        assert_eq!(
            EstimateRequest::parse("100", "99999999999"),
            Err(EstimateError::InvalidInput)
        );
    }

    #[test]
    fn test_from_f64() {
        let req = EstimateRequest::from_f64(100.0, 10.7).unwrap();
        assert_eq!(req.amount, dec!(100));
        assert_eq!(req.duration_days, 10);
    }

    #[test]
    fn test_from_f64_non_finite() {
        assert_eq!(
            EstimateRequest::from_f64(f64::NAN, 10.0),
            Err(EstimateError::InvalidInput)
        );
        assert_eq!(
            EstimateRequest::from_f64(100.0, f64::INFINITY),
            Err(EstimateError::InvalidInput)
        );
        assert_eq!(
            EstimateRequest::from_f64(-1.0, 10.0),
            Err(EstimateError::InvalidInput)
        );
    }

    #[test]
    fn test_from_f64_unrepresentable_out_of_range() {
        assert_eq!(
            EstimateRequest::from_f64(1e30, 1.0),
            Err(EstimateError::OutOfRange)
        );
        assert_eq!(
            EstimateRequest::from_f64(f64::MIN_POSITIVE, 1.0),
            Err(EstimateError::OutOfRange)
        );
    }

    #[test]
    fn test_tier_contains_is_inclusive() {
        let tier = RateTier {
            lower_bound: dec!(1),
            upper_bound: dec!(500),
            daily_rate_percent: dec!(4.0),
        };
        assert!(tier.contains(dec!(1)));
        assert!(tier.contains(dec!(500)));
        assert!(!tier.contains(dec!(0.99)));
        assert!(!tier.contains(dec!(500.01)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            EstimateError::OutOfRange.to_string(),
            "Investment amount is outside the supported range."
        );
    }
}
