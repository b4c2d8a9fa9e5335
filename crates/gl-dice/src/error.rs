//! Error types for dice parsing.

/// Errors that can occur while parsing dice notation.
#[derive(Debug, thiserror::Error)]
pub enum DiceError {
    /// A damage string that is not `NdM`, `NdM+K`, or `NdM-K`.
    #[error("malformed damage expression: '{0}'")]
    MalformedDamageExpression(String),

    /// A die with fewer than two sides, or too many dice in one roll.
    #[error("invalid die: {0}")]
    InvalidDie(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
