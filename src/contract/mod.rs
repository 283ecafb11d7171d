//! Donation pool contract module
//!
//! Read and write access to the deployed pool contract (paper and JSON-RPC)

mod paper;
mod rpc;
mod units;

pub use paper::PaperContract;
pub use rpc::{IDailyCash, RpcContract};
pub use units::{from_wei, to_wei, UnitError, ETHER_DECIMALS};

/// Hash of a submitted transaction
pub use alloy::primitives::TxHash;

use crate::wallet::AccountAddress;
use alloy::primitives::U256;
use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

/// Contract call errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContractError {
    /// The node or contract rejected the call
    #[error("{0}")]
    CallFailed(String),
    /// Deposit amount is not a positive, representable ether value
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    /// No contract address for the current network
    #[error("contract not deployed on this network")]
    NotDeployed,
}

/// Trait for donation pool contract implementations
#[async_trait]
pub trait DonationContract: Send + Sync {
    /// Bonus currently available to the account, in ether
    async fn available_bonus(&self, account: AccountAddress) -> Result<Decimal, ContractError>;
    /// Deposit `amount` ether from `account`, crediting `referrer`
    async fn invest(
        &self,
        referrer: AccountAddress,
        amount: Decimal,
        account: AccountAddress,
    ) -> Result<TxHash, ContractError>;
    /// Withdraw everything available to the account
    async fn withdraw(&self, account: AccountAddress) -> Result<TxHash, ContractError>;
}

/// Convert a deposit amount to wei, rejecting zero and negative values
pub(crate) fn deposit_wei(amount: Decimal) -> Result<U256, ContractError> {
    if amount <= Decimal::ZERO {
        return Err(ContractError::InvalidAmount(format!(
            "{amount} is not a positive amount"
        )));
    }
    to_wei(amount).map_err(|e| ContractError::InvalidAmount(e.to_string()))
}
