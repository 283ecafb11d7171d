//! Integration tests for referrer capture

use daily_cash::referral::{read_referrer, StaticLocation};
use daily_cash::wallet::AccountAddress;

#[test]
fn test_referral_link() {
    let referrer: AccountAddress = "0x8A7C94E02F7B8c381693314d797568692cd1cBD6".parse().unwrap();
    let link = format!("https://dailycash.example/?ref={referrer}&utm_source=share");
    let location = StaticLocation::parse(&link).unwrap();
    assert_eq!(read_referrer(&location), Some(referrer));
}
