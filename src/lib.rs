//! daily-cash: client for the Daily Cash community donation pool
//!
//! This library provides the core components for:
//! - Tiered daily-rate return estimation
//! - Wallet connection (paper and JSON-RPC providers)
//! - Pool contract access: bonus, deposit, withdrawal
//! - Referrer capture from the page location
//! - Explicit application state with a reducer
//! - Logging and metrics

pub mod app;
pub mod cli;
pub mod config;
pub mod contract;
pub mod estimator;
pub mod referral;
pub mod rpc;
pub mod telemetry;
pub mod wallet;
