//! JSON bodies and error responses of the HTTP API

use crate::error::MortgageError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

pub const CHECK_INPUT: &str = "check input";
pub const DOWN_PAYMENT_REJECTED: &str =
    "check down_pay >= 5% for 1st 500k, 10% for rest, also atBor > down_pay";
pub const SOMETHING_WENT_WRONG: &str = "something went wrong. Check your input.";

#[derive(Debug, Serialize)]
pub struct PaymentAmountResponse {
    pub payment_amount: f64,
}

/// Field name keeps the published spelling used by existing clients
#[derive(Debug, Serialize)]
pub struct MortgageAmountResponse {
    #[serde(rename = "mortage_amount")]
    pub mortgage_amount: f64,
}

#[derive(Debug, Serialize)]
pub struct InterestRateResponse {
    pub interest_rate: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    #[serde(rename = "Error")]
    error: &'static str,
}

/// Which endpoint failed; each reports rejections with its own message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    PaymentAmount,
    MortgageAmount,
    InterestRate,
}

impl Endpoint {
    fn rejection_message(&self) -> &'static str {
        match self {
            Endpoint::PaymentAmount => DOWN_PAYMENT_REJECTED,
            Endpoint::MortgageAmount | Endpoint::InterestRate => SOMETHING_WENT_WRONG,
        }
    }
}

/// Engine or parse failure, rendered as a 400 with a fixed message
#[derive(Debug)]
pub struct ApiError {
    pub endpoint: Endpoint,
    pub error: MortgageError,
}

impl ApiError {
    pub fn new(endpoint: Endpoint, error: impl Into<MortgageError>) -> Self {
        Self {
            endpoint,
            error: error.into(),
        }
    }

    pub fn message(&self) -> &'static str {
        if self.error.is_input_error() {
            CHECK_INPUT
        } else {
            self.endpoint.rejection_message()
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        log::warn!("{:?} request failed: {}", self.endpoint, self.error);
        let body = ErrorBody { error: self.message() };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
