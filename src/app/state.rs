//! Application state and its reducer

use crate::estimator::EstimateResult;
use crate::wallet::AccountAddress;
use rust_decimal::Decimal;

/// State changes the host can apply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Wallet handed out an account
    Connected(AccountAddress),
    /// User disconnected the wallet
    Disconnected,
    /// Contract handle became available
    ContractReady,
    /// Fresh bonus reading from the contract
    BonusLoaded(Decimal),
    /// Referrer input edited
    ReferrerEdited(String),
    /// A deposit was sent crediting `referrer`
    Invested { referrer: AccountAddress },
    /// Calculator produced a result
    Estimated(EstimateResult),
    /// Message for the status dialog
    Status(String),
    /// Status dialog closed
    DismissStatus,
}

/// Everything the presentation layer shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub account: Option<AccountAddress>,
    pub contract_ready: bool,
    /// Last bonus reading, in ether
    pub bonus: Decimal,
    /// Referrer captured from the location at startup
    pub location_referrer: Option<AccountAddress>,
    pub referrer_input: String,
    pub has_invested: bool,
    pub previous_referrer: Option<AccountAddress>,
    pub estimate: Option<EstimateResult>,
    pub status: Option<String>,
}

impl AppState {
    /// Initial state, pre-filling the referrer input from the location
    pub fn new(location_referrer: Option<AccountAddress>) -> Self {
        Self {
            location_referrer,
            referrer_input: referrer_text(location_referrer),
            ..Self::default()
        }
    }

    /// Wallet connected and contract available
    pub fn is_ready(&self) -> bool {
        self.account.is_some() && self.contract_ready
    }

    /// Referrer shown in the (possibly locked) input
    pub fn referrer_display(&self) -> String {
        match (self.has_invested, self.previous_referrer) {
            (true, Some(previous)) => previous.to_string(),
            _ => self.referrer_input.clone(),
        }
    }

    /// Apply an action
    pub fn reduce(self, action: Action) -> Self {
        match action {
            Action::Connected(account) => Self {
                account: Some(account),
                ..self
            },
            Action::Disconnected => Self {
                account: None,
                bonus: Decimal::ZERO,
                has_invested: false,
                previous_referrer: None,
                referrer_input: referrer_text(self.location_referrer),
                ..self
            },
            Action::ContractReady => Self {
                contract_ready: true,
                ..self
            },
            Action::BonusLoaded(bonus) => Self { bonus, ..self },
            Action::ReferrerEdited(text) if !self.has_invested => Self {
                referrer_input: text,
                ..self
            },
            Action::ReferrerEdited(_) => self,
            Action::Invested { referrer } if !self.has_invested => Self {
                has_invested: true,
                previous_referrer: Some(referrer),
                ..self
            },
            Action::Invested { .. } => self,
            Action::Estimated(result) => Self {
                estimate: Some(result),
                ..self
            },
            Action::Status(message) => Self {
                status: Some(message),
                ..self
            },
            Action::DismissStatus => Self {
                status: None,
                ..self
            },
        }
    }
}

fn referrer_text(referrer: Option<AccountAddress>) -> String {
    referrer.map(|r| r.to_string()).unwrap_or_default()
}
