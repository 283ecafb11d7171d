//! Pool contract reached through a node's JSON-RPC interface

use super::{deposit_wei, from_wei, ContractError, DonationContract, TxHash};
use crate::wallet::AccountAddress;
use alloy::primitives::Address;
use alloy::providers::DynProvider;
use alloy::sol;
use async_trait::async_trait;
use rust_decimal::Decimal;

sol! {
    #[sol(rpc)]
    interface IDailyCash {
        /// Bonus accrued and not yet withdrawn, in wei
        function getUserAvailable(address user) external view returns (uint256);
        /// Deposit the attached value, crediting `referrer` on the first deposit
        function invest(address referrer) external payable;
        /// Pay out everything available to the sender
        function withdraw() external;
    }
}

/// Deployed pool contract at a fixed address
pub struct RpcContract {
    pool: IDailyCash::IDailyCashInstance<DynProvider>,
}

impl RpcContract {
    /// Bind to the contract deployed at `address`
    pub fn new(provider: DynProvider, address: AccountAddress) -> Self {
        Self {
            pool: IDailyCash::new(address.into(), provider),
        }
    }

    /// Contract address
    pub fn address(&self) -> AccountAddress {
        AccountAddress::from(*self.pool.address())
    }
}

fn call_failed(err: alloy::contract::Error) -> ContractError {
    ContractError::CallFailed(err.to_string())
}

#[async_trait]
impl DonationContract for RpcContract {
    async fn available_bonus(&self, account: AccountAddress) -> Result<Decimal, ContractError> {
        let wei = self
            .pool
            .getUserAvailable(account.into())
            .call()
            .await
            .map_err(call_failed)?;

        let bonus = from_wei(wei).map_err(|e| ContractError::CallFailed(e.to_string()))?;
        tracing::debug!(%account, %wei, "Fetched available bonus");
        Ok(bonus)
    }

    async fn invest(
        &self,
        referrer: AccountAddress,
        amount: Decimal,
        account: AccountAddress,
    ) -> Result<TxHash, ContractError> {
        let wei = deposit_wei(amount)?;

        tracing::info!(%account, %referrer, %amount, "Submitting deposit");
        let pending = self
            .pool
            .invest(Address::from(referrer))
            .from(account.into())
            .value(wei)
            .send()
            .await
            .map_err(call_failed)?;

        let tx = *pending.tx_hash();
        tracing::info!(tx = %tx, "Deposit submitted");
        Ok(tx)
    }

    async fn withdraw(&self, account: AccountAddress) -> Result<TxHash, ContractError> {
        tracing::info!(%account, "Submitting withdrawal");
        let pending = self
            .pool
            .withdraw()
            .from(account.into())
            .send()
            .await
            .map_err(call_failed)?;

        let tx = *pending.tx_hash();
        tracing::info!(tx = %tx, "Withdrawal submitted");
        Ok(tx)
    }
}
