//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Contract methods the host calls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractMethod {
    /// `getUserAvailable`
    AvailableBonus,
    /// `invest`
    Invest,
    /// `withdraw`
    Withdraw,
}

impl ContractMethod {
    fn label(self) -> &'static str {
        match self {
            ContractMethod::AvailableBonus => "get_user_available",
            ContractMethod::Invest => "invest",
            ContractMethod::Withdraw => "withdraw",
        }
    }
}

fn outcome(success: bool) -> &'static str {
    if success {
        "ok"
    } else {
        "error"
    }
}

/// Count a calculator run
pub fn record_estimate(success: bool) {
    ::metrics::counter!("dailycash_estimates_total", "outcome" => outcome(success)).increment(1);
}

/// Count a contract call
pub fn record_contract_call(method: ContractMethod, success: bool) {
    ::metrics::counter!(
        "dailycash_contract_calls_total",
        "method" => method.label(),
        "outcome" => outcome(success)
    )
    .increment(1);
}

/// Count a wallet connection attempt
pub fn record_wallet_connect(success: bool) {
    ::metrics::counter!("dailycash_wallet_connects_total", "outcome" => outcome(success))
        .increment(1);
}

/// Serve metrics for scraping on the given port
pub fn init_metrics_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;
    tracing::info!(%addr, "Metrics exporter listening");
    Ok(())
}
