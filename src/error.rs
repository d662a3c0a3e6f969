use serde::{Deserialize, Serialize};
use thiserror::Error;

/// All action-rejection errors generated by the core.
///
/// A rejected action leaves every piece of state untouched (fail closed, no
/// partial application).
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Error)]
pub enum ActionError {
    #[error("unknown venue in selection: {0}")]
    UnknownVenue(String),

    #[error("invalid time range: {0}ms")]
    InvalidTimeRange(i64),

    #[error("invalid quantity threshold: {0}")]
    InvalidQuantityThreshold(f64),
}
