//! End-to-end tests over the paper network

use daily_cash::app::{SessionError, INVEST_OK};
use daily_cash::cli::build_session;
use daily_cash::config::Config;
use daily_cash::referral::{NoLocation, StaticLocation};
use rust_decimal_macros::dec;

#[test]
fn test_example_config_loads() {
    let config = Config::example().unwrap();
    assert_eq!(config.network.currency, "POL");
}

#[tokio::test]
async fn test_paper_deposit_flow() {
    let config = Config::example().unwrap();
    let location =
        StaticLocation::parse("?ref=0x00000000000000000000000000000000000000aa").unwrap();
    let mut session = build_session(&config, &location).unwrap();

    assert_eq!(session.invest("1").await, Err(SessionError::NotReady));

    session.connect().await.unwrap();
    session.invest("5").await.unwrap();
    assert_eq!(session.state().status.as_deref(), Some(INVEST_OK));
    assert_eq!(
        session.state().referrer_display().to_lowercase(),
        "0x00000000000000000000000000000000000000aa"
    );

    // Nothing has accrued yet on a fresh deposit.
    assert_eq!(session.refresh_bonus().await, Ok(dec!(0)));
    assert!(session.withdraw().await.is_err());
}

#[test]
fn test_estimate_through_session() {
    let config = Config::example().unwrap();
    let mut session = build_session(&config, &NoLocation).unwrap();
    let result = session.estimate("10000", "5").unwrap();
    assert_eq!(result.projected_return, dec!(2250));
}

#[test]
fn test_block_on_connect() {
    let config = Config::example().unwrap();
    let mut session = build_session(&config, &NoLocation).unwrap();
    let account = tokio_test::block_on(session.connect()).unwrap();
    assert_eq!(Some(account), config.wallet.paper_account);
}
