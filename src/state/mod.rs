//! Persisted project state.
//!
//! - [`history`] - Deployment records produced by `zkwasm check`
//! - [`store`] - The `.zkwasm/history.json` log

pub mod history;
pub mod store;

pub use history::DeploymentRecord;
pub use store::{HistoryLog, HISTORY_FILE, MAX_RECORDS};
