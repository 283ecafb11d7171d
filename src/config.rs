//! Configuration types for daily-cash

use crate::telemetry::LogFormat;
use crate::wallet::AccountAddress;
use serde::Deserialize;
use std::time::Duration;

/// Configuration shipped with the binary, used when no file is found
pub const EXAMPLE_CONFIG: &str = include_str!("../config.toml.example");

/// Root configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub network: NetworkConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    pub telemetry: TelemetryConfig,
}

/// Network and contract configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub mode: NetworkMode,
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Deployed pool contract; absent means not deployed on this network
    #[serde(default)]
    pub contract_address: Option<AccountAddress>,
    /// Referrer credited when the user supplies none (the contract owner)
    pub default_referrer: AccountAddress,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Native currency symbol shown next to amounts
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl NetworkConfig {
    /// JSON-RPC request timeout
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_rpc_url() -> String {
    "http://localhost:8545".to_string()
}
fn default_request_timeout_secs() -> u64 {
    10
}
fn default_currency() -> String {
    "POL".to_string()
}

/// Network mode: simulated in memory or a real node
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NetworkMode {
    Paper,
    Rpc,
}

/// Paper wallet configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    /// Account the paper wallet hands out
    #[serde(default)]
    pub paper_account: Option<AccountAddress>,
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Configuration embedded from `config.toml.example`
    pub fn example() -> anyhow::Result<Self> {
        Ok(toml::from_str(EXAMPLE_CONFIG)?)
    }
}
