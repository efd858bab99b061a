//! Annuity discount factor linking a periodic payment to a principal
//!
//! D = [(1 + i)^n - 1] / [i (1 + i)^n]
//!
//! where i is the periodic interest rate (annual percent / 100 / payments per
//! year) and n the total number of payments. Principal = payment * D.

use crate::error::Rejection;
use serde::Serialize;

/// Discount factor together with the inputs it was built from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountFactor {
    /// Interest rate per payment period, as a decimal
    pub period_rate: f64,
    pub payments_per_year: u32,
    /// Total number of payments over the amortization period
    pub payment_count: u32,
    pub value: f64,
}

impl DiscountFactor {
    pub fn new(annual_rate_pct: f64, payments_per_year: u32, amortization_years: u32) -> Result<Self, Rejection> {
        let period_rate = period_interest_rate(annual_rate_pct, payments_per_year);
        let payment_count = payments_per_year.saturating_mul(amortization_years);

        if period_rate == 0.0 {
            return Err(Rejection::DivideByZero);
        }

        let growth = (1.0 + period_rate).powf(payment_count as f64);
        let value = (growth - 1.0) / (period_rate * growth);

        // A period rate of -100% zeroes the denominator as well
        if !value.is_finite() {
            return Err(Rejection::DivideByZero);
        }

        Ok(Self {
            period_rate,
            payments_per_year,
            payment_count,
            value,
        })
    }

    /// Principal supported by a periodic payment
    pub fn principal_for(&self, payment: f64) -> f64 {
        payment * self.value
    }

    /// Periodic payment that repays a principal
    pub fn payment_for(&self, principal: f64) -> f64 {
        principal / self.value
    }
}

/// Periodic rate as a decimal from an annual rate in percent
pub fn period_interest_rate(annual_rate_pct: f64, payments_per_year: u32) -> f64 {
    annual_rate_pct / 100.0 / payments_per_year as f64
}

/// Discount factor value for an annual rate in percent
pub fn discount_factor(annual_rate_pct: f64, payments_per_year: u32, amortization_years: u32) -> Result<f64, Rejection> {
    DiscountFactor::new(annual_rate_pct, payments_per_year, amortization_years).map(|d| d.value)
}

/// Round half away from zero to whole cents
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_monthly_six_years() {
        let d = DiscountFactor::new(2.5, 12, 6).unwrap();

        assert_relative_eq!(d.period_rate, 0.025 / 12.0);
        assert_eq!(d.payment_count, 72);
        assert_relative_eq!(d.value, 66.79570270547323, epsilon = 1e-9);
    }

    #[test]
    fn test_matches_level_annuity_sum() {
        // D equals the sum of v^t for t = 1..=n
        let d = DiscountFactor::new(4.0, 26, 10).unwrap();
        let v = 1.0 / (1.0 + d.period_rate);
        let sum: f64 = (1..=d.payment_count).map(|t| v.powi(t as i32)).sum();

        assert_relative_eq!(d.value, sum, epsilon = 1e-9);
    }

    #[test]
    fn test_payment_and_principal_are_inverse() {
        let d = DiscountFactor::new(2.5, 52, 25).unwrap();
        let payment = d.payment_for(300_000.0);

        assert_relative_eq!(d.principal_for(payment), 300_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_rate_is_divide_by_zero() {
        assert_eq!(discount_factor(0.0, 12, 6), Err(Rejection::DivideByZero));
        assert_eq!(discount_factor(-1200.0, 12, 6), Err(Rejection::DivideByZero));
    }

    #[test]
    fn test_negative_rate_still_computes() {
        let d = discount_factor(-1.0, 12, 5).unwrap();
        // Negative interest means more than n payments' worth of principal
        assert!(d > 60.0);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(449.1274), 449.13);
        assert_eq!(round_cents(29_999.954), 29_999.95);
        assert_eq!(round_cents(-12.345_1), -12.35);
        assert_eq!(round_cents(100.0), 100.0);
    }
}
