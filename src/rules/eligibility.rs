//! Borrowing eligibility: minimum down payment and amortization range

use crate::error::Rejection;

/// Minimum down payment rule.
///
/// Up to `tier_threshold` the down payment must cover `base_pct` of the
/// asking price. Above it the borrower pays `base_pct` of the threshold plus
/// `excess_pct` of everything beyond it.
#[derive(Debug, Clone, PartialEq)]
pub struct DownPaymentRule {
    pub tier_threshold: f64,
    pub base_pct: f64,
    pub excess_pct: f64,
}

impl Default for DownPaymentRule {
    fn default() -> Self {
        Self {
            tier_threshold: 500_000.0,
            base_pct: 0.05,
            excess_pct: 0.10,
        }
    }
}

impl DownPaymentRule {
    /// Minimum down payment for an asking price
    pub fn required(&self, asking_price: f64) -> f64 {
        if asking_price <= self.tier_threshold {
            asking_price * self.base_pct
        } else {
            self.first_tier_minimum() + (asking_price - self.tier_threshold) * self.excess_pct
        }
    }

    /// 25,000 under the default rule
    pub fn first_tier_minimum(&self) -> f64 {
        self.tier_threshold * self.base_pct
    }

    /// Check the down payment is sufficient and leaves something to borrow
    pub fn check(&self, asking_price: f64, down_payment: f64) -> Result<(), Rejection> {
        let required = self.required(asking_price);

        if asking_price > down_payment && down_payment >= required {
            Ok(())
        } else {
            Err(Rejection::InsufficientDownPayment {
                asking_price,
                down_payment,
                required,
            })
        }
    }
}

/// Allowed amortization periods, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmortizationRange {
    pub min_years: u32,
    pub max_years: u32,
}

impl Default for AmortizationRange {
    fn default() -> Self {
        Self {
            min_years: 5,
            max_years: 25,
        }
    }
}

impl AmortizationRange {
    /// Validate a period, returning it as whole years ready for the payment math.
    ///
    /// Takes a signed count so negative periods are range rejections like
    /// any other out-of-range integer.
    pub fn check(&self, years: i64) -> Result<u32, Rejection> {
        match u32::try_from(years) {
            Ok(y) if (self.min_years..=self.max_years).contains(&y) => Ok(y),
            _ => Err(Rejection::AmortizationOutOfRange {
                years,
                min: self.min_years,
                max: self.max_years,
            }),
        }
    }
}
