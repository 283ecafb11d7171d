//! Wallet module
//!
//! Account connection through a browser-style wallet provider

mod address;
mod paper;
mod rpc;

pub use address::{AccountAddress, AddressError};
pub use paper::PaperWallet;
pub use rpc::RpcWallet;

use async_trait::async_trait;
use thiserror::Error;

/// Wallet connection errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    /// No provider, provider unreachable, or no accounts exposed
    #[error("wallet unavailable: {0}")]
    Unavailable(String),
    /// The user declined the connection request
    #[error("user rejected the request")]
    UserRejected,
}

/// Trait for wallet provider implementations
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the provider for an account, prompting the user if needed
    async fn connect(&self) -> Result<AccountAddress, WalletError>;
}
