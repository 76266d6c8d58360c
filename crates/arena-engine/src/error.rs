//! Error types for tournament setup and execution

use thiserror::Error;

use crate::payoff::PayoffError;

pub type Result<T> = std::result::Result<T, ArenaError>;

/// Every failure is fatal: the run stops at the first one.
#[derive(Debug, Error)]
pub enum ArenaError {
    #[error("strategy {0} already exists")]
    DuplicateStrategy(String),

    #[error("strategy {0} set to compare, but doesn't exist")]
    UnknownCompareStrategy(String),

    #[error("invalid run configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse run configuration: {0}")]
    ParseConfig(#[from] serde_json::Error),

    #[error("strategy {strategy} returned an invalid move: {value}")]
    InvalidMove { strategy: String, value: i64 },

    #[error("invalid payoff matrix: {0}")]
    Payoff(#[from] PayoffError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArenaError {
    /// Raised before any match is played
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            ArenaError::DuplicateStrategy(_)
                | ArenaError::UnknownCompareStrategy(_)
                | ArenaError::InvalidConfig(_)
                | ArenaError::ParseConfig(_)
                | ArenaError::Payoff(_)
        )
    }
}
