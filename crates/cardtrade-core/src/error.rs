//! Error types for cardtrade

use thiserror::Error;

/// Main error type for cardtrade core operations.
///
/// Search exhaustion is an expected outcome and is reported through return
/// values, so the only faults here are validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardTradeError {
    /// A quality tier was built from an ordinal outside `0..=2`.
    #[error("quality tier {0} not in range 0 - 2")]
    TierOutOfRange(i64),

    /// A quality tier was built from a name other than bronze, silver or gold.
    #[error("unknown quality tier name: {0:?}")]
    UnknownTierName(String),
}

/// Result type alias for cardtrade operations
pub type Result<T> = std::result::Result<T, CardTradeError>;
