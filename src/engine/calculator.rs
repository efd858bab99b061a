//! Mortgage engine: payment amount, maximum mortgage and rate updates

use super::discount::{round_cents, DiscountFactor};
use super::rate::{InterestRate, RateChange};
use crate::error::{Rejection, Result};
use crate::mortgage::{AffordabilityRequest, MortgageRequest};
use crate::rules::LendingRules;
use log::{debug, info, warn};
use serde::Serialize;

/// Breakdown of a payment calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaymentQuote {
    /// Interest rate used, annual percent
    pub interest_rate: f64,
    /// Mortgage insurance added to the principal
    pub insurance: f64,
    /// Amount borrowed including insurance
    pub principal: f64,
    pub payments_per_year: u32,
    pub payment_count: u32,
    pub discount_factor: f64,
    /// Periodic payment, rounded to cents
    pub payment_amount: f64,
}

/// Mortgage calculator holding the current interest rate.
///
/// Calculations only read the rate, so the engine is shared by reference
/// (typically behind an `Arc`) between request handlers.
#[derive(Debug, Default)]
pub struct MortgageEngine {
    rate: InterestRate,
    rules: LendingRules,
}

impl MortgageEngine {
    /// Engine at the default 2.5% rate with default lending rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine starting at a given annual rate (percent)
    pub fn with_rate(rate: f64) -> Result<Self> {
        Ok(Self {
            rate: InterestRate::new(rate)?,
            rules: LendingRules::default(),
        })
    }

    /// Replace the lending rules
    pub fn with_rules(mut self, rules: LendingRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn interest_rate(&self) -> f64 {
        self.rate.get()
    }

    pub fn rules(&self) -> &LendingRules {
        &self.rules
    }

    /// Full payment breakdown for a purchase.
    ///
    /// Rejected when the down payment is insufficient, the amortization
    /// period is out of range, or the current rate is zero.
    pub fn quote(&self, request: &MortgageRequest) -> Result<PaymentQuote> {
        let years = match self.rules.check_purchase(
            request.asking_price,
            request.down_payment,
            request.amortization_years,
        ) {
            Ok(years) => years,
            Err(rejection) => {
                warn!("payment request rejected: {}", rejection);
                return Err(rejection.into());
            }
        };

        let insurance = self.rules.insurance.premium(request.asking_price, request.down_payment);
        let principal = request.loan_amount() + insurance;

        let interest_rate = self.rate.get();
        let discount = self.discount_factor(
            interest_rate,
            request.payment_schedule.payments_per_year(),
            years,
        )?;

        let payment_amount = round_cents(discount.payment_for(principal));
        debug!(
            "quote: insurance={:.2} principal={:.2} rate={} n={} D={:.6} payment={:.2}",
            insurance, principal, interest_rate, discount.payment_count, discount.value, payment_amount
        );

        Ok(PaymentQuote {
            interest_rate,
            insurance,
            principal,
            payments_per_year: discount.payments_per_year,
            payment_count: discount.payment_count,
            discount_factor: discount.value,
            payment_amount,
        })
    }

    /// Periodic payment for a purchase, rounded to cents
    pub fn compute_payment_amount(&self, request: &MortgageRequest) -> Result<f64> {
        self.quote(request).map(|q| q.payment_amount)
    }

    /// Largest mortgage a periodic payment supports, rounded to cents.
    ///
    /// Only the amortization range is validated.
    pub fn compute_mortgage_amount(&self, request: &AffordabilityRequest) -> Result<f64> {
        let years = match self.rules.amortization.check(request.amortization_years) {
            Ok(years) => years,
            Err(rejection) => {
                warn!("mortgage request rejected: {}", rejection);
                return Err(rejection.into());
            }
        };

        let discount = self.discount_factor(self.rate.get(), request.payment_schedule.payments_per_year(), years)?;

        let mortgage_amount = round_cents(discount.principal_for(request.payment_amount));
        debug!(
            "mortgage: payment={} n={} D={:.6} amount={:.2}",
            request.payment_amount, discount.payment_count, discount.value, mortgage_amount
        );

        Ok(mortgage_amount)
    }

    /// Set a new annual rate (percent); returns the previous and new values.
    ///
    /// No range check is applied. A zero rate is accepted here and makes
    /// later calculations fail with a divide-by-zero rejection.
    pub fn update_interest_rate(&self, new_rate: f64) -> Result<RateChange> {
        let change = self.rate.replace(new_rate)?;

        if new_rate <= 0.0 {
            warn!("interest rate set to non-positive value {}", new_rate);
        }
        info!(
            "interest rate changed from {} to {}",
            change.old_interest_rate, change.new_interest_rate
        );

        Ok(change)
    }

    /// Parse a rate from text and apply it; unparseable text leaves the rate
    /// untouched
    pub fn update_interest_rate_str(&self, text: &str) -> Result<RateChange> {
        let rate = text
            .trim()
            .parse::<f64>()
            .map_err(|_| Rejection::UnparseableRate(text.to_string()))?;
        self.update_interest_rate(rate)
    }

    fn discount_factor(&self, rate: f64, payments_per_year: u32, years: u32) -> Result<DiscountFactor> {
        DiscountFactor::new(rate, payments_per_year, years).map_err(|rejection| {
            warn!("discount factor failed at rate {}: {}", rate, rejection);
            rejection.into()
        })
    }
}
