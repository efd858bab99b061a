//! Mortgage request data structures and batch loading

mod data;
pub mod loader;

pub use data::{AffordabilityRequest, MortgageRequest, PaymentSchedule};
pub use loader::{load_requests, load_requests_from_reader, BatchRow};
