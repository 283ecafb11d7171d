//! Wallet backed by a node's JSON-RPC account list

use super::{AccountAddress, WalletError, WalletProvider};
use crate::rpc::{error_code, USER_REJECTED_CODE};
use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider};
use alloy::transports::TransportError;
use async_trait::async_trait;

/// Wallet that requests accounts with `eth_requestAccounts`
pub struct RpcWallet {
    provider: DynProvider,
}

impl RpcWallet {
    /// Create a wallet over a shared provider
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn connect(&self) -> Result<AccountAddress, WalletError> {
        let accounts: Vec<Address> = self
            .provider
            .raw_request("eth_requestAccounts".into(), ())
            .await
            .map_err(map_rpc_error)?;

        let account = first_account(&accounts)?;
        tracing::info!(account = %account, "Wallet connected");
        Ok(account)
    }
}

fn map_rpc_error(err: TransportError) -> WalletError {
    if error_code(&err) == Some(USER_REJECTED_CODE) {
        WalletError::UserRejected
    } else {
        WalletError::Unavailable(err.to_string())
    }
}

fn first_account(accounts: &[Address]) -> Result<AccountAddress, WalletError> {
    accounts
        .first()
        .map(|&address| AccountAddress::from(address))
        .ok_or_else(|| WalletError::Unavailable("provider returned no accounts".to_string()))
}
