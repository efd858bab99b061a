//! Lending rules: down-payment sufficiency, amortization range, insurance

mod eligibility;
mod insurance;

pub use eligibility::{AmortizationRange, DownPaymentRule};
pub use insurance::{mortgage_insurance, InsuranceSchedule, InsuranceTier};

use crate::error::Rejection;

/// Container for all lending rules applied by the engine
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LendingRules {
    pub down_payment: DownPaymentRule,
    pub amortization: AmortizationRange,
    pub insurance: InsuranceSchedule,
}

impl LendingRules {
    /// Rules applied before a payment amount is computed; returns the
    /// validated amortization period in years
    pub fn check_purchase(&self, asking_price: f64, down_payment: f64, amortization_years: i64) -> Result<u32, Rejection> {
        self.down_payment.check(asking_price, down_payment)?;
        self.amortization.check(amortization_years)
    }
}
