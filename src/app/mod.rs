//! Application module
//!
//! Explicit UI state, its reducer, and the session that drives wallet and
//! contract calls.

mod session;
mod state;

pub use session::{Session, SessionError, INVEST_OK, WITHDRAW_OK};
pub use state::{Action, AppState};
