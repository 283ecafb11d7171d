//! Estimate command implementation

use crate::estimator::TieredEstimator;
use crate::telemetry;
use clap::Args;

#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Amount to deposit
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: String,

    /// Number of days
    #[arg(short, long, allow_hyphen_values = true)]
    pub days: String,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    pub fn execute(&self, currency: &str) -> anyhow::Result<()> {
        let result = TieredEstimator::new().estimate_str(&self.amount, &self.days);
        telemetry::record_estimate(result.is_ok());
        let result = result?;

        tracing::debug!(
            amount = %result.amount,
            days = result.duration_days,
            rate = %result.daily_rate_percent,
            "Estimated return"
        );

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "Daily rate: {}% for {} day(s)",
                result.daily_rate_percent, result.duration_days
            );
            println!("Result: {} {}", result.projected_return, currency);
        }
        Ok(())
    }
}
