//! Paper pool contract with simulated accrual
//!
//! Deposits accrue through the tiered estimator for every whole day since
//! the deposit (or since the last withdrawal, whichever is later).

use super::{deposit_wei, ContractError, DonationContract, TxHash};
use crate::estimator::{EstimateError, EstimateRequest, TieredEstimator};
use crate::wallet::AccountAddress;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone)]
struct Deposit {
    amount: Decimal,
    at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Ledger {
    deposits: Vec<Deposit>,
    referrer: Option<AccountAddress>,
    checkpoint: Option<DateTime<Utc>>,
    withdrawn: Decimal,
}

/// In-memory stand-in for the deployed pool contract
pub struct PaperContract {
    estimator: TieredEstimator,
    ledgers: Arc<RwLock<HashMap<AccountAddress, Ledger>>>,
    clock_offset: RwLock<Duration>,
}

impl PaperContract {
    /// Create an empty paper contract
    pub fn new() -> Self {
        Self {
            estimator: TieredEstimator::new(),
            ledgers: Arc::new(RwLock::new(HashMap::new())),
            clock_offset: RwLock::new(Duration::zero()),
        }
    }

    /// Move the simulated clock forward
    pub async fn advance(&self, by: Duration) {
        let mut offset = self.clock_offset.write().await;
        *offset += by;
    }

    /// Referrer recorded on the account's first deposit
    pub async fn referrer_of(&self, account: AccountAddress) -> Option<AccountAddress> {
        let ledgers = self.ledgers.read().await;
        ledgers.get(&account).and_then(|l| l.referrer)
    }

    /// Total paid out to the account so far
    pub async fn withdrawn(&self, account: AccountAddress) -> Decimal {
        let ledgers = self.ledgers.read().await;
        ledgers
            .get(&account)
            .map(|l| l.withdrawn)
            .unwrap_or(Decimal::ZERO)
    }

    async fn now(&self) -> DateTime<Utc> {
        Utc::now() + *self.clock_offset.read().await
    }

    fn accrued(&self, ledger: &Ledger, now: DateTime<Utc>) -> Decimal {
        ledger
            .deposits
            .iter()
            .map(|deposit| {
                let start = match ledger.checkpoint {
                    Some(checkpoint) if checkpoint > deposit.at => checkpoint,
                    _ => deposit.at,
                };
                let days = (now - start).num_days();
                if days <= 0 {
                    return Decimal::ZERO;
                }
                let days = u32::try_from(days).unwrap_or(u32::MAX);
                EstimateRequest::new(deposit.amount, days)
                    .and_then(|req| self.estimator.estimate(&req))
                    .map(|result| result.projected_return)
                    .unwrap_or_else(|e: EstimateError| {
                        tracing::debug!(amount = %deposit.amount, error = %e, "Deposit accrues nothing");
                        Decimal::ZERO
                    })
            })
            .sum()
    }
}

impl Default for PaperContract {
    fn default() -> Self {
        Self::new()
    }
}

fn paper_tx_hash() -> TxHash {
    let mut bytes = [0u8; 32];
    bytes[..16].copy_from_slice(Uuid::new_v4().as_bytes());
    bytes[16..].copy_from_slice(Uuid::new_v4().as_bytes());
    TxHash::from(bytes)
}

#[async_trait]
impl DonationContract for PaperContract {
    async fn available_bonus(&self, account: AccountAddress) -> Result<Decimal, ContractError> {
        let now = self.now().await;
        let ledgers = self.ledgers.read().await;
        Ok(ledgers
            .get(&account)
            .map(|ledger| self.accrued(ledger, now))
            .unwrap_or(Decimal::ZERO))
    }

    async fn invest(
        &self,
        referrer: AccountAddress,
        amount: Decimal,
        account: AccountAddress,
    ) -> Result<TxHash, ContractError> {
        deposit_wei(amount)?;
        let now = self.now().await;

        let mut ledgers = self.ledgers.write().await;
        let ledger = ledgers.entry(account).or_default();
        if ledger.referrer.is_none() && referrer != account {
            ledger.referrer = Some(referrer);
        }
        ledger.deposits.push(Deposit { amount, at: now });

        let tx = paper_tx_hash();
        tracing::info!(%account, %referrer, %amount, tx = %tx, "Paper deposit recorded");
        Ok(tx)
    }

    async fn withdraw(&self, account: AccountAddress) -> Result<TxHash, ContractError> {
        let now = self.now().await;

        let mut ledgers = self.ledgers.write().await;
        let ledger = ledgers
            .get_mut(&account)
            .ok_or_else(|| ContractError::CallFailed("execution reverted: no deposits".to_string()))?;

        let available = self.accrued(ledger, now);
        if available.is_zero() {
            return Err(ContractError::CallFailed(
                "execution reverted: nothing to withdraw".to_string(),
            ));
        }
        ledger.checkpoint = Some(now);
        ledger.withdrawn += available;

        let tx = paper_tx_hash();
        tracing::info!(%account, %available, tx = %tx, "Paper withdrawal paid");
        Ok(tx)
    }
}
