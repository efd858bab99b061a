//! Calculation engine and the shared interest rate

mod calculator;
mod discount;
mod rate;

pub use calculator::{MortgageEngine, PaymentQuote};
pub use discount::{discount_factor, period_interest_rate, round_cents, DiscountFactor};
pub use rate::{InterestRate, RateChange, DEFAULT_INTEREST_RATE};
