//! Errors raised by rational construction, arithmetic and factorial lookups.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, RatioError>;

/// Everything that can go wrong while building or combining ratios.
///
/// Every error is raised by the operation that violates the rule; no
/// partially built value is ever returned alongside it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    /// A ratio was constructed with a zero denominator.
    #[error("zero denominator")]
    ZeroDenominator,

    /// A ratio was divided by zero, or the reciprocal of zero was requested.
    #[error("division by zero")]
    DivisionByZero,

    /// An integer was requested from a ratio whose denominator is not 1.
    #[error("{numer}/{denom} is not an integer")]
    NotAnInteger { numer: i128, denom: i128 },

    /// The exact result does not fit the backing integer type.
    #[error("integer overflow in {operation}")]
    Overflow { operation: &'static str },
}

impl RatioError {
    /// Returns `true` for errors caused by a zero divisor, as opposed to
    /// conversion or range failures.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::ZeroDenominator | Self::DivisionByZero)
    }

    pub(crate) fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }
}
