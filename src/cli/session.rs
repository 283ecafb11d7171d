//! Interactive session command
//!
//! A line-oriented stand-in for the web dashboard: each line is one button
//! press or form submission.

use super::{build_session, location_from};
use crate::app::Session;
use crate::config::Config;
use clap::Args;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
commands:
  connect                 connect the wallet
  disconnect              disconnect the wallet
  bonus                   check your available grant
  ref <address>           set the referrer (before the first deposit)
  invest <amount>         give donations
  withdraw                get donations
  estimate <amount> <days>  run the calculator
  status                  show the dashboard
  help                    show this help
  quit                    leave the session";

#[derive(Args, Debug)]
pub struct SessionArgs {
    /// Page location carrying a `?ref=` parameter
    #[arg(short, long)]
    pub location: Option<String>,
}

/// One line of session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Connect,
    Disconnect,
    Bonus,
    Referrer(String),
    Invest(String),
    Withdraw,
    Estimate { amount: String, days: String },
    Status,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse a line; `Ok(None)` for blank lines
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let parsed = match (command.to_lowercase().as_str(), args.as_slice()) {
            ("connect", []) => Self::Connect,
            ("disconnect", []) => Self::Disconnect,
            ("bonus", []) => Self::Bonus,
            ("ref", [address]) => Self::Referrer(address.to_string()),
            ("ref", []) => Self::Referrer(String::new()),
            ("invest", [amount]) => Self::Invest(amount.to_string()),
            ("withdraw", []) => Self::Withdraw,
            ("estimate", [amount, days]) => Self::Estimate {
                amount: amount.to_string(),
                days: days.to_string(),
            },
            ("status", []) => Self::Status,
            ("help", []) | ("?", []) => Self::Help,
            ("quit", []) | ("exit", []) => Self::Quit,
            (other, _) => return Err(format!("unknown or malformed command: {other} (try `help`)")),
        };
        Ok(Some(parsed))
    }
}

impl SessionArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let location = location_from(self.location.as_deref())?;
        let mut session = build_session(config, location.as_ref())?;

        println!("Daily Cash Community");
        println!("\"Building a Brighter Future Through Collective Giving\"");
        println!("{HELP}");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            match ShellCommand::parse(&line) {
                Ok(Some(ShellCommand::Quit)) => break,
                Ok(Some(command)) => run_command(&mut session, command, config).await,
                Ok(None) => {}
                Err(message) => println!("{message}"),
            }
        }

        tracing::info!("Session closed");
        Ok(())
    }
}

async fn run_command(session: &mut Session, command: ShellCommand, config: &Config) {
    let currency = config.network.currency.as_str();
    match command {
        ShellCommand::Connect => {
            if let Ok(account) = session.connect().await {
                println!("Connected Account: {}", account.short());
            }
        }
        ShellCommand::Disconnect => {
            session.disconnect();
            println!("Wallet disconnected.");
        }
        ShellCommand::Bonus => {
            if let Ok(bonus) = session.refresh_bonus().await {
                println!("Grant for You: {bonus:.8} {currency}");
            }
        }
        ShellCommand::Referrer(address) => {
            if session.state().has_invested {
                println!("Referrer is locked to {}", session.state().referrer_display());
            } else {
                session.edit_referrer(address);
            }
        }
        ShellCommand::Invest(amount) => {
            if let Ok(tx) = session.invest(&amount).await {
                println!("Transaction: {tx}");
            }
        }
        ShellCommand::Withdraw => {
            if let Ok(tx) = session.withdraw().await {
                println!("Transaction: {tx}");
            }
        }
        ShellCommand::Estimate { amount, days } => {
            if let Ok(result) = session.estimate(&amount, &days) {
                println!("Result: {} {currency}", result.projected_return);
            }
        }
        ShellCommand::Status => print_dashboard(session, currency),
        ShellCommand::Help => println!("{HELP}"),
        ShellCommand::Quit => {}
    }

    if let Some(status) = session.state().status.clone() {
        println!("[{status}]");
        session.dismiss_status();
    }
}

fn print_dashboard(session: &Session, currency: &str) {
    let state = session.state();
    match state.account {
        Some(account) => {
            println!("Connected Account: {}", account.short());
            println!("Grant for You: {:.8} {currency}", state.bonus);
            let referrer = state.referrer_display();
            let lock = if state.has_invested { " (locked)" } else { "" };
            println!(
                "Referrer: {}{lock}",
                if referrer.is_empty() { "-" } else { referrer.as_str() }
            );
        }
        None => println!("Wallet not connected"),
    }
    if !state.contract_ready {
        println!("Contract not deployed on this network.");
    }
    if let Some(estimate) = state.estimate {
        println!(
            "Last estimate: {} {currency} for {} at {}% over {} day(s)",
            estimate.projected_return,
            estimate.amount,
            estimate.daily_rate_percent,
            estimate.duration_days
        );
    }
}
