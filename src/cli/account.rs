//! Connect, bonus and withdraw commands

use super::build_session;
use crate::config::{Config, NetworkMode};
use crate::referral::NoLocation;

/// Paper pools live only as long as one process
const PAPER_ONE_SHOT_NOTICE: &str = "paper mode: this command starts from an empty simulated pool; \
     run `daily-cash session` to keep one pool across deposits and withdrawals";

/// Notice for one-shot commands whose pool state does not outlive the process
pub fn one_shot_notice(mode: NetworkMode) -> Option<&'static str> {
    match mode {
        NetworkMode::Paper => Some(PAPER_ONE_SHOT_NOTICE),
        NetworkMode::Rpc => None,
    }
}

fn warn_one_shot(config: &Config) {
    if let Some(notice) = one_shot_notice(config.network.mode) {
        tracing::warn!(mode = ?config.network.mode, "One-shot command on an empty paper pool");
        eprintln!("{notice}");
    }
}

/// Connect the wallet and print the account
pub async fn run_connect(config: &Config) -> anyhow::Result<()> {
    let mut session = build_session(config, &NoLocation)?;
    let account = session.connect().await?;
    println!("Connected Account: {}", account.short());
    println!("Full address: {account}");
    Ok(())
}

/// Print the bonus available to the connected account
pub async fn run_bonus(config: &Config) -> anyhow::Result<()> {
    warn_one_shot(config);
    let mut session = build_session(config, &NoLocation)?;
    session.connect().await?;
    let bonus = session.refresh_bonus().await?;
    println!("Grant for You: {:.8} {}", bonus, config.network.currency);
    Ok(())
}

/// Withdraw everything available to the connected account
pub async fn run_withdraw(config: &Config) -> anyhow::Result<()> {
    warn_one_shot(config);
    let mut session = build_session(config, &NoLocation)?;
    session.connect().await?;
    let tx = session.withdraw().await?;
    if let Some(status) = session.state().status.as_deref() {
        println!("{status}");
    }
    println!("Transaction: {tx}");
    Ok(())
}
