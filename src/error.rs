//! Error types for mortgage calculations
//!
//! Two kinds reach the caller: input that is missing or unreadable, and
//! requests the lending rules or the payment math reject.

use thiserror::Error;

/// Result type alias using MortgageError
pub type Result<T> = std::result::Result<T, MortgageError>;

/// Unified error type for engine and boundary operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MortgageError {
    #[error("missing required field `{0}`")]
    MissingInput(&'static str),

    #[error("field `{field}` has an invalid value: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("request rejected: {0}")]
    Rejected(#[from] Rejection),
}

impl MortgageError {
    /// True for the "check input" family (absent or unparseable fields)
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::MissingInput(_) | Self::InvalidInput { .. })
    }

    pub(crate) fn invalid(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidInput { field, value: value.into() }
    }
}

/// Semantic validation or computation failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("down payment {down_payment:.2} must be at least {required:.2} and below the asking price {asking_price:.2}")]
    InsufficientDownPayment {
        asking_price: f64,
        down_payment: f64,
        required: f64,
    },

    #[error("amortization period of {years} years is outside {min}..={max}")]
    AmortizationOutOfRange { years: i64, min: u32, max: u32 },

    #[error("divide-by-zero: period interest rate is 0")]
    DivideByZero,

    #[error("interest rate {0:?} is not a number")]
    UnparseableRate(String),

    #[error("interest rate must be finite")]
    NonFiniteRate,
}
