//! Invest command implementation

use super::{build_session, location_from};
use crate::config::Config;
use clap::Args;

#[derive(Args, Debug)]
pub struct InvestArgs {
    /// Amount to deposit, in the network's currency
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// Referrer address (defaults to the `ref` parameter of --location, then the contract owner)
    #[arg(short, long)]
    pub referrer: Option<String>,

    /// Page location carrying a `?ref=` parameter
    #[arg(short, long)]
    pub location: Option<String>,
}

impl InvestArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let location = location_from(self.location.as_deref())?;
        let mut session = build_session(config, location.as_ref())?;
        session.connect().await?;

        if let Some(referrer) = &self.referrer {
            session.edit_referrer(referrer.as_str());
        }

        let tx = session.invest(&self.amount).await?;
        if let Some(status) = session.state().status.as_deref() {
            println!("{status}");
        }
        println!("Referrer: {}", session.state().referrer_display());
        println!("Transaction: {tx}");
        Ok(())
    }
}
