//! Integration tests for the estimator

use daily_cash::estimator::{estimate, EstimateError, EstimateRequest, TieredEstimator};
use rust_decimal_macros::dec;

#[test]
fn test_documented_scenarios() {
    let cases = [
        ("100", "10", dec!(4.0), "40.00"),
        ("1000", "30", dec!(4.2), "1260.00"),
        ("10000", "5", dec!(4.5), "2250.00"),
    ];
    for (amount, days, rate, expected) in cases {
        let result = estimate(amount, days).unwrap();
        assert_eq!(result.daily_rate_percent, rate);
        assert_eq!(result.projected_return.to_string(), expected);
    }
}

#[test]
fn test_tier_edges() {
    let estimator = TieredEstimator::new();
    let rate = |amount| {
        EstimateRequest::new(amount, 1)
            .and_then(|req| estimator.estimate(&req))
            .map(|r| r.daily_rate_percent)
    };
    assert_eq!(rate(dec!(500)), Ok(dec!(4.0)));
    assert_eq!(rate(dec!(501)), Ok(dec!(4.2)));
    assert_eq!(rate(dec!(5000)), Ok(dec!(4.2)));
    assert_eq!(rate(dec!(5001)), Ok(dec!(4.5)));
    assert_eq!(rate(dec!(20000)), Ok(dec!(4.5)));
    assert_eq!(rate(dec!(20001)), Err(EstimateError::OutOfRange));
    assert_eq!(rate(dec!(0.5)), Err(EstimateError::OutOfRange));
}

#[test]
fn test_rejected_inputs() {
    for (amount, days) in [("0", "1"), ("-5", "1"), ("1", "0"), ("1", "-3"), ("abc", "1")] {
        assert_eq!(estimate(amount, days), Err(EstimateError::InvalidInput));
    }
}

#[test]
fn test_unrepresentable_and_exponent_inputs() {
    assert_eq!(estimate("1e30", "1"), Err(EstimateError::OutOfRange));
    assert_eq!(
        estimate("0.00000000000000000000000000001", "1"),
        Err(EstimateError::OutOfRange)
    );
    assert_eq!(estimate("1e30", "abc"), Err(EstimateError::InvalidInput));

    let result = estimate("100", "1e3").unwrap();
    assert_eq!(result.duration_days, 1);
    assert_eq!(result.projected_return.to_string(), "4.00");
}

#[test]
fn test_result_serializes() {
    let result = estimate("1000", "30").unwrap();
    let json = serde_json::to_value(result).unwrap();
    assert_eq!(json["duration_days"], 30);
    assert_eq!(json["projected_return"], "1260.00");
}
