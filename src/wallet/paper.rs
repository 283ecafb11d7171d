//! Paper wallet with a fixed account

use super::{AccountAddress, WalletError, WalletProvider};
use async_trait::async_trait;

/// Wallet that always hands out the configured account
pub struct PaperWallet {
    account: Option<AccountAddress>,
}

impl PaperWallet {
    /// Create a paper wallet; `None` behaves like a missing extension
    pub fn new(account: Option<AccountAddress>) -> Self {
        Self { account }
    }
}

#[async_trait]
impl WalletProvider for PaperWallet {
    async fn connect(&self) -> Result<AccountAddress, WalletError> {
        let account = self
            .account
            .ok_or_else(|| WalletError::Unavailable("no paper account configured".to_string()))?;
        tracing::info!(account = %account, "Paper wallet connected");
        Ok(account)
    }
}
