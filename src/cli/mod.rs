//! CLI interface for daily-cash
//!
//! Provides subcommands for:
//! - `estimate`: Project a return with the tiered calculator
//! - `connect`: Connect the wallet and show the account
//! - `bonus`: Show the available bonus
//! - `invest`: Deposit with an optional referrer
//! - `withdraw`: Withdraw the available bonus
//! - `session`: Interactive session
//! - `config`: Show configuration

mod account;
mod estimate;
mod invest;
mod session;

pub use account::{run_bonus, run_connect, run_withdraw};
pub use estimate::EstimateArgs;
pub use invest::InvestArgs;
pub use session::{SessionArgs, ShellCommand};

use crate::app::Session;
use crate::config::{Config, NetworkMode};
use crate::contract::{DonationContract, PaperContract, RpcContract};
use crate::referral::{LocationQuery, NoLocation, StaticLocation};
use crate::rpc::{self, RpcConfig};
use crate::wallet::{PaperWallet, RpcWallet, WalletProvider};
use clap::{Parser, Subcommand};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(name = "daily-cash")]
#[command(about = "Client and return estimator for the Daily Cash donation pool")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Project a return with the tiered calculator
    Estimate(EstimateArgs),
    /// Connect the wallet and show the account
    Connect,
    /// Show the available bonus
    ///
    /// In paper mode each invocation starts from an empty simulated pool, so
    /// the bonus is always zero; use `session` to keep one pool across commands.
    Bonus,
    /// Deposit with an optional referrer
    Invest(InvestArgs),
    /// Withdraw the available bonus
    ///
    /// In paper mode each invocation starts from an empty simulated pool, so
    /// there is nothing to withdraw; use `session` to keep one pool across commands.
    Withdraw,
    /// Interactive session
    Session(SessionArgs),
    /// Show configuration
    Config,
}

/// Location from a `--location` flag, or none
pub fn location_from(arg: Option<&str>) -> anyhow::Result<Box<dyn LocationQuery>> {
    match arg {
        Some(raw) => Ok(Box::new(StaticLocation::parse(raw)?)),
        None => Ok(Box::new(NoLocation)),
    }
}

/// Wire a session to the wallet and contract selected by the configuration
pub fn build_session(config: &Config, location: &dyn LocationQuery) -> anyhow::Result<Session> {
    let (wallet, contract): (Arc<dyn WalletProvider>, Option<Arc<dyn DonationContract>>) =
        match config.network.mode {
            NetworkMode::Paper => (
                Arc::new(PaperWallet::new(config.wallet.paper_account)) as Arc<dyn WalletProvider>,
                Some(Arc::new(PaperContract::new()) as Arc<dyn DonationContract>),
            ),
            NetworkMode::Rpc => {
                let provider = rpc::connect(&RpcConfig {
                    url: config.network.rpc_url.clone(),
                    timeout: config.network.request_timeout(),
                })?;
                let contract = config.network.contract_address.map(|address| {
                    Arc::new(RpcContract::new(provider.clone(), address))
                        as Arc<dyn DonationContract>
                });
                (
                    Arc::new(RpcWallet::new(provider)) as Arc<dyn WalletProvider>,
                    contract,
                )
            }
        };

    Ok(Session::new(
        wallet,
        contract,
        location,
        config.network.default_referrer,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_parse_estimate() {
        let cli = Cli::parse_from(["daily-cash", "estimate", "--amount", "100", "--days", "10"]);
        match cli.command {
            Commands::Estimate(args) => {
                assert_eq!(args.amount, "100");
                assert_eq!(args.days, "10");
                assert!(!args.json);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.config, "config.toml");
    }

    #[test]
    fn test_parse_invest() {
        let cli = Cli::parse_from([
            "daily-cash",
            "-c",
            "other.toml",
            "invest",
            "--amount",
            "2.5",
            "--location",
            "?ref=0xA531D8A9a62a694e4C8520c52f2d9968fa3B3E7c",
        ]);
        assert_eq!(cli.config, "other.toml");
        match cli.command {
            Commands::Invest(args) => {
                assert_eq!(args.amount, "2.5");
                assert!(args.referrer.is_none());
                assert!(args.location.is_some());
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_one_shot_help_points_to_session() {
        let command = Cli::command();
        for name in ["bonus", "withdraw"] {
            let sub = command.find_subcommand(name).unwrap();
            let help = sub.get_long_about().unwrap().to_string();
            assert!(help.contains("paper mode"), "{name}: {help}");
            assert!(help.contains("session"), "{name}: {help}");
        }
    }

    #[test]
    fn test_location_from() {
        let location = location_from(Some("?ref=abc")).unwrap();
        assert_eq!(location.get("ref").as_deref(), Some("abc"));
        assert!(location_from(None).unwrap().get("ref").is_none());
    }

    #[tokio::test]
    async fn test_build_paper_session() {
        let config = Config::example().unwrap();
        let mut session = build_session(&config, &NoLocation).unwrap();
        assert!(session.state().contract_ready);
        session.connect().await.unwrap();
        assert!(session.state().is_ready());
    }

    #[test]
    fn test_build_rpc_session_without_contract() {
        let mut config = Config::example().unwrap();
        config.network.mode = NetworkMode::Rpc;
        config.network.contract_address = None;
        let session = build_session(&config, &NoLocation).unwrap();
        assert!(!session.state().contract_ready);
    }
}
