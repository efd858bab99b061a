//! Shared annual interest rate

use crate::error::Rejection;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};

/// Starting annual interest rate, percent
pub const DEFAULT_INTEREST_RATE: f64 = 2.5;

/// Result of a rate update: the value replaced and the value now in effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateChange {
    pub old_interest_rate: f64,
    pub new_interest_rate: f64,
}

/// Annual interest rate in percent, shared by every calculation.
///
/// Reads take a shared lock and updates swap the value under an exclusive
/// lock, so concurrent updates never lose a write and every update reports
/// the value it actually replaced. The guarded value is a plain `f64`, so a
/// poisoned lock still holds a complete value and is used as-is.
#[derive(Debug)]
pub struct InterestRate {
    value: RwLock<f64>,
}

impl InterestRate {
    pub fn new(rate: f64) -> Result<Self, Rejection> {
        if !rate.is_finite() {
            return Err(Rejection::NonFiniteRate);
        }
        Ok(Self { value: RwLock::new(rate) })
    }

    /// Current rate
    pub fn get(&self) -> f64 {
        *self.value.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the rate, returning the previous and new values.
    ///
    /// Any finite value is accepted, including zero and negative rates.
    pub fn replace(&self, new_rate: f64) -> Result<RateChange, Rejection> {
        if !new_rate.is_finite() {
            return Err(Rejection::NonFiniteRate);
        }

        let mut guard = self.value.write().unwrap_or_else(PoisonError::into_inner);
        let old_rate = std::mem::replace(&mut *guard, new_rate);

        Ok(RateChange {
            old_interest_rate: old_rate,
            new_interest_rate: new_rate,
        })
    }
}

impl Default for InterestRate {
    fn default() -> Self {
        Self { value: RwLock::new(DEFAULT_INTEREST_RATE) }
    }
}
