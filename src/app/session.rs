//! Session: runs wallet and contract effects and folds their outcomes
//! into [`AppState`]

use super::{Action, AppState};
use crate::contract::{ContractError, DonationContract, TxHash};
use crate::estimator::{EstimateError, EstimateResult, TieredEstimator};
use crate::referral::{read_referrer, resolve_referrer, LocationQuery};
use crate::telemetry::{self, ContractMethod};
use crate::wallet::{AccountAddress, AddressError, WalletError, WalletProvider};
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// Session errors; the display text is what the status dialog shows
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Wallet not connected or contract not initialized")]
    NotReady,
    #[error("Invalid investment amount")]
    InvalidAmount,
    #[error("Invalid referrer address: {0}")]
    InvalidReferrer(AddressError),
    #[error("Failed to connect wallet: {0}")]
    Connect(WalletError),
    #[error("Failed to retrieve bonus: {0}")]
    Bonus(ContractError),
    #[error("Investment failed: {0}")]
    Invest(ContractError),
    #[error("Withdrawal failed: {0}")]
    Withdraw(ContractError),
    #[error("{0}")]
    Estimate(#[from] EstimateError),
}

/// Status after a confirmed deposit
pub const INVEST_OK: &str = "Investment successful!";
/// Status after a confirmed withdrawal
pub const WITHDRAW_OK: &str = "Withdrawal successful!";

/// A connected (or connectable) user session
pub struct Session {
    state: AppState,
    wallet: Arc<dyn WalletProvider>,
    contract: Option<Arc<dyn DonationContract>>,
    default_referrer: AccountAddress,
    estimator: TieredEstimator,
}

impl Session {
    /// Create a session
    ///
    /// `contract` is `None` when no contract is deployed on the current
    /// network. The referrer is read from `location` once, here.
    pub fn new(
        wallet: Arc<dyn WalletProvider>,
        contract: Option<Arc<dyn DonationContract>>,
        location: &dyn LocationQuery,
        default_referrer: AccountAddress,
    ) -> Self {
        let mut state = AppState::new(read_referrer(location));
        if contract.is_some() {
            state = state.reduce(Action::ContractReady);
        } else {
            tracing::error!("Contract not deployed on this network.");
        }

        Self {
            state,
            wallet,
            contract,
            default_referrer,
            estimator: TieredEstimator::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    fn fail<T>(&mut self, err: SessionError) -> Result<T, SessionError> {
        tracing::warn!(error = %err, "Session action failed");
        self.dispatch(Action::Status(err.to_string()));
        Err(err)
    }

    fn ready(&self) -> Option<(AccountAddress, Arc<dyn DonationContract>)> {
        match (self.state.account, &self.contract) {
            (Some(account), Some(contract)) => Some((account, Arc::clone(contract))),
            _ => None,
        }
    }

    /// Connect the wallet
    pub async fn connect(&mut self) -> Result<AccountAddress, SessionError> {
        let result = self.wallet.connect().await;
        telemetry::record_wallet_connect(result.is_ok());
        match result {
            Ok(account) => {
                tracing::info!(account = %account, "Connected account");
                self.dispatch(Action::Connected(account));
                Ok(account)
            }
            Err(e) => self.fail(SessionError::Connect(e)),
        }
    }

    /// Forget the account and everything tied to it
    pub fn disconnect(&mut self) {
        self.dispatch(Action::Disconnected);
        tracing::info!("Wallet disconnected.");
    }

    /// Edit the referrer input (ignored once a deposit was made)
    pub fn edit_referrer(&mut self, text: impl Into<String>) {
        self.dispatch(Action::ReferrerEdited(text.into()));
    }

    /// Close the status dialog
    pub fn dismiss_status(&mut self) {
        self.dispatch(Action::DismissStatus);
    }

    /// Fetch the available bonus
    pub async fn refresh_bonus(&mut self) -> Result<Decimal, SessionError> {
        let Some((account, contract)) = self.ready() else {
            return self.fail(SessionError::NotReady);
        };

        let result = contract.available_bonus(account).await;
        telemetry::record_contract_call(ContractMethod::AvailableBonus, result.is_ok());
        match result {
            Ok(bonus) => {
                tracing::info!(%account, %bonus, "Total bonus");
                self.dispatch(Action::BonusLoaded(bonus));
                Ok(bonus)
            }
            Err(e) => self.fail(SessionError::Bonus(e)),
        }
    }

    /// Deposit `amount` (ether, as typed) crediting the session's referrer
    pub async fn invest(&mut self, amount: &str) -> Result<TxHash, SessionError> {
        let Some((account, contract)) = self.ready() else {
            return self.fail(SessionError::NotReady);
        };

        let amount = match Decimal::from_str(amount.trim()) {
            Ok(amount) if amount > Decimal::ZERO => amount,
            _ => return self.fail(SessionError::InvalidAmount),
        };

        let referrer = match resolve_referrer(
            self.state.previous_referrer,
            &self.state.referrer_input,
            self.default_referrer,
        ) {
            Ok(referrer) => referrer,
            Err(e) => return self.fail(SessionError::InvalidReferrer(e)),
        };
        // The referrer is committed before the transaction is sent.
        self.dispatch(Action::Invested { referrer });

        tracing::info!(%amount, %referrer, "Making investment");
        let result = contract.invest(referrer, amount, account).await;
        telemetry::record_contract_call(ContractMethod::Invest, result.is_ok());
        match result {
            Ok(tx) => {
                tracing::info!(tx = %tx, "Investment successful");
                self.dispatch(Action::Status(INVEST_OK.to_string()));
                Ok(tx)
            }
            Err(e) => self.fail(SessionError::Invest(e)),
        }
    }

    /// Withdraw everything available
    pub async fn withdraw(&mut self) -> Result<TxHash, SessionError> {
        let Some((account, contract)) = self.ready() else {
            return self.fail(SessionError::NotReady);
        };

        let result = contract.withdraw(account).await;
        telemetry::record_contract_call(ContractMethod::Withdraw, result.is_ok());
        match result {
            Ok(tx) => {
                tracing::info!(tx = %tx, "Withdrawal successful");
                self.dispatch(Action::Status(WITHDRAW_OK.to_string()));
                Ok(tx)
            }
            Err(e) => self.fail(SessionError::Withdraw(e)),
        }
    }

    /// Run the calculator on the two form inputs
    pub fn estimate(&mut self, amount: &str, days: &str) -> Result<EstimateResult, SessionError> {
        let result = self.estimator.estimate_str(amount, days);
        telemetry::record_estimate(result.is_ok());
        match result {
            Ok(result) => {
                self.dispatch(Action::Estimated(result));
                Ok(result)
            }
            Err(e) => self.fail(e.into()),
        }
    }
}
