//! Mortgage Calculator - payment, affordability and insurance calculations
//!
//! This library provides:
//! - Periodic payment amount for a purchase, insurance included
//! - Maximum mortgage supported by a periodic payment
//! - Mortgage insurance by down-payment ratio
//! - A shared, updatable annual interest rate
//! - An HTTP API and batch CSV quoting on top of the engine

pub mod api;
pub mod config;
pub mod engine;
pub mod error;
pub mod mortgage;
pub mod rules;

// Re-export commonly used types
pub use engine::{MortgageEngine, PaymentQuote, RateChange};
pub use error::{MortgageError, Rejection, Result};
pub use mortgage::{AffordabilityRequest, MortgageRequest, PaymentSchedule};
pub use rules::{mortgage_insurance, LendingRules};
