//! Typed mortgage requests and the text-to-typed parse step

use crate::error::{MortgageError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

/// Frequency of mortgage payments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentSchedule {
    Weekly,
    Biweekly,
    Monthly,
}

impl PaymentSchedule {
    /// Number of payments made in one year
    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentSchedule::Monthly => 12,
            PaymentSchedule::Biweekly => 26,
            PaymentSchedule::Weekly => 52,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentSchedule::Weekly => "weekly",
            PaymentSchedule::Biweekly => "biweekly",
            PaymentSchedule::Monthly => "monthly",
        }
    }
}

impl fmt::Display for PaymentSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentSchedule {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "weekly" => Ok(PaymentSchedule::Weekly),
            "biweekly" => Ok(PaymentSchedule::Biweekly),
            "monthly" => Ok(PaymentSchedule::Monthly),
            other => Err(MortgageError::invalid("payment_schedule", other)),
        }
    }
}

/// Inputs for a periodic payment calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MortgageRequest {
    /// Asking price of the property
    pub asking_price: f64,

    /// Down payment paid up front
    pub down_payment: f64,

    pub payment_schedule: PaymentSchedule,

    /// Amortization period in whole years, range-checked by the engine
    pub amortization_years: i64,
}

impl MortgageRequest {
    /// Build a request from already-typed values.
    ///
    /// Asking price must be positive and the down payment non-negative; both
    /// must be finite. Sufficiency of the down payment is a lending rule and
    /// is checked by the engine, not here.
    pub fn new(
        asking_price: f64,
        down_payment: f64,
        payment_schedule: PaymentSchedule,
        amortization_years: i64,
    ) -> Result<Self> {
        if !asking_price.is_finite() || asking_price <= 0.0 {
            return Err(MortgageError::invalid("asking_price", asking_price.to_string()));
        }
        if !down_payment.is_finite() || down_payment < 0.0 {
            return Err(MortgageError::invalid("down_payment", down_payment.to_string()));
        }

        Ok(Self {
            asking_price,
            down_payment,
            payment_schedule,
            amortization_years,
        })
    }

    /// Parse a request from raw text fields such as query-string values.
    ///
    /// Every field is checked for presence before any is parsed, so a
    /// request missing one field reports `MissingInput` even when another
    /// field is malformed.
    pub fn parse(
        asking_price: Option<&str>,
        down_payment: Option<&str>,
        payment_schedule: Option<&str>,
        amortization_years: Option<&str>,
    ) -> Result<Self> {
        let asking_price = require("asking_price", asking_price)?;
        let down_payment = require("down_payment", down_payment)?;
        let payment_schedule = require("payment_schedule", payment_schedule)?;
        let amortization_years = require("amor_period", amortization_years)?;

        Self::new(
            parse_amount("asking_price", asking_price)?,
            parse_amount("down_payment", down_payment)?,
            payment_schedule.parse()?,
            parse_years(amortization_years)?,
        )
    }

    /// Amount borrowed before insurance
    pub fn loan_amount(&self) -> f64 {
        self.asking_price - self.down_payment
    }

    /// Down payment as a percentage of the asking price
    pub fn down_payment_ratio(&self) -> f64 {
        self.down_payment / self.asking_price * 100.0
    }
}

/// Inputs for a maximum-mortgage calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffordabilityRequest {
    /// Periodic payment the borrower can make, insurance included
    pub payment_amount: f64,

    pub payment_schedule: PaymentSchedule,

    /// Amortization period in whole years, range-checked by the engine
    pub amortization_years: i64,
}

impl AffordabilityRequest {
    pub fn new(payment_amount: f64, payment_schedule: PaymentSchedule, amortization_years: i64) -> Result<Self> {
        if !payment_amount.is_finite() {
            return Err(MortgageError::invalid("payment_amount", payment_amount.to_string()));
        }

        Ok(Self {
            payment_amount,
            payment_schedule,
            amortization_years,
        })
    }

    /// Parse a request from raw text fields such as query-string values
    pub fn parse(
        payment_amount: Option<&str>,
        payment_schedule: Option<&str>,
        amortization_years: Option<&str>,
    ) -> Result<Self> {
        let payment_amount = require("payment_amount", payment_amount)?;
        let payment_schedule = require("payment_schedule", payment_schedule)?;
        let amortization_years = require("amor_period", amortization_years)?;

        Self::new(
            parse_amount("payment_amount", payment_amount)?,
            payment_schedule.parse()?,
            parse_years(amortization_years)?,
        )
    }
}

/// Absent and empty values both count as missing
fn require<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MortgageError::MissingInput(field)),
    }
}

/// Parse a finite decimal amount
fn parse_amount(field: &'static str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(MortgageError::invalid(field, text)),
    }
}

/// Amortization periods are whole years; "6.0" is not accepted.
///
/// Integers too large for `i64` saturate so they fail the range check
/// rather than the parse.
fn parse_years(text: &str) -> Result<i64> {
    match text.trim().parse::<i64>() {
        Ok(years) => Ok(years),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(MortgageError::invalid("amor_period", text)),
        },
    }
}
