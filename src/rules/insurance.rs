//! Mortgage insurance premiums by down-payment ratio

/// One premium band: applies when `min_ratio <= ratio < max_ratio`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsuranceTier {
    /// Lower bound of the down-payment ratio, percent (inclusive)
    pub min_ratio: f64,
    /// Upper bound of the down-payment ratio, percent (exclusive)
    pub max_ratio: f64,
    /// Premium as a fraction of the mortgage amount
    pub premium_rate: f64,
}

/// Insurance premium schedule
#[derive(Debug, Clone, PartialEq)]
pub struct InsuranceSchedule {
    /// Mortgages above this amount cannot be insured and carry no premium
    pub insurable_ceiling: f64,
    /// Premium bands; ratios outside every band pay nothing
    tiers: Vec<InsuranceTier>,
}

impl Default for InsuranceSchedule {
    fn default() -> Self {
        Self::new(
            1_000_000.0,
            vec![
                InsuranceTier { min_ratio: 5.0, max_ratio: 10.0, premium_rate: 0.0315 },
                InsuranceTier { min_ratio: 10.0, max_ratio: 15.0, premium_rate: 0.024 },
                InsuranceTier { min_ratio: 15.0, max_ratio: 20.0, premium_rate: 0.018 },
            ],
        )
    }
}

impl InsuranceSchedule {
    pub fn new(insurable_ceiling: f64, tiers: Vec<InsuranceTier>) -> Self {
        Self {
            insurable_ceiling,
            tiers,
        }
    }

    /// Premium rate for a down-payment ratio given in percent
    pub fn premium_rate(&self, down_ratio: f64) -> f64 {
        self.tiers
            .iter()
            .find(|t| down_ratio >= t.min_ratio && down_ratio < t.max_ratio)
            .map(|t| t.premium_rate)
            .unwrap_or(0.0)
    }

    /// Insurance amount added to the principal.
    ///
    /// Zero when the mortgage exceeds the insurable ceiling, when the ratio
    /// is 20% or more, and when the ratio is below 5%. The last case only
    /// arises for callers that skip the down-payment check.
    pub fn premium(&self, asking_price: f64, down_payment: f64) -> f64 {
        let mortgage_amount = asking_price - down_payment;
        if mortgage_amount > self.insurable_ceiling {
            return 0.0;
        }

        let down_ratio = down_payment / asking_price * 100.0;
        mortgage_amount * self.premium_rate(down_ratio)
    }
}

/// Insurance under the default schedule
pub fn mortgage_insurance(asking_price: f64, down_payment: f64) -> f64 {
    InsuranceSchedule::default().premium(asking_price, down_payment)
}
