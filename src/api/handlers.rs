//! Request handlers: parse text input, call the engine, encode the result

use super::response::{
    ApiError, Endpoint, HealthResponse, InterestRateResponse, MortgageAmountResponse, PaymentAmountResponse,
};
use super::AppState;
use crate::engine::RateChange;
use crate::error::{MortgageError, Rejection};
use crate::mortgage::{AffordabilityRequest, MortgageRequest};
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use serde_json::Value;

/// Raw query-string pairs in request order.
///
/// A repeated key resolves to its first value; later ones are ignored.
#[derive(Debug, Default)]
struct QueryPairs(Vec<(String, String)>);

impl QueryPairs {
    fn from_extractor(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Result<Self, MortgageError> {
        match query {
            Ok(Query(pairs)) => Ok(Self(pairs)),
            Err(rejection) => Err(MortgageError::invalid("query", rejection.body_text())),
        }
    }

    fn first(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// GET /payment-amount
pub async fn payment_amount(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<PaymentAmountResponse>, ApiError> {
    let fail = |e: MortgageError| ApiError::new(Endpoint::PaymentAmount, e);

    let params = QueryPairs::from_extractor(query).map_err(fail)?;
    let request = MortgageRequest::parse(
        params.first("asking_price"),
        params.first("down_payment"),
        params.first("payment_schedule"),
        params.first("amor_period"),
    )
    .map_err(fail)?;

    let payment_amount = state.engine.compute_payment_amount(&request).map_err(fail)?;
    Ok(Json(PaymentAmountResponse { payment_amount }))
}

/// GET /mortgage-amount
pub async fn mortgage_amount(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<MortgageAmountResponse>, ApiError> {
    let fail = |e: MortgageError| ApiError::new(Endpoint::MortgageAmount, e);

    let params = QueryPairs::from_extractor(query).map_err(fail)?;
    let request = AffordabilityRequest::parse(
        params.first("payment_amount"),
        params.first("payment_schedule"),
        params.first("amor_period"),
    )
    .map_err(fail)?;

    let mortgage_amount = state.engine.compute_mortgage_amount(&request).map_err(fail)?;
    Ok(Json(MortgageAmountResponse { mortgage_amount }))
}

/// GET /interest-rate
pub async fn current_interest_rate(State(state): State<AppState>) -> Json<InterestRateResponse> {
    Json(InterestRateResponse {
        interest_rate: state.engine.interest_rate(),
    })
}

/// PATCH /interest-rate
///
/// The body is read raw so an empty or malformed body is reported as an
/// input error rather than the extractor's own rejection.
pub async fn update_interest_rate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RateChange>, ApiError> {
    let fail = |e: MortgageError| ApiError::new(Endpoint::InterestRate, e);

    let rate = rate_from_body(&body).map_err(fail)?;
    let change = match rate {
        RateInput::Number(rate) => state.engine.update_interest_rate(rate),
        RateInput::Text(text) => state.engine.update_interest_rate_str(&text),
    }
    .map_err(fail)?;

    Ok(Json(change))
}

#[derive(Debug, PartialEq)]
enum RateInput {
    Number(f64),
    Text(String),
}

fn rate_from_body(body: &[u8]) -> Result<RateInput, MortgageError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(MortgageError::MissingInput("interest_rate"));
    }

    let json: Value = serde_json::from_slice(body)
        .map_err(|e| MortgageError::invalid("body", e.to_string()))?;

    let fields = match json {
        Value::Object(fields) => fields,
        other => return Err(MortgageError::invalid("body", other.to_string())),
    };

    match fields.get("interest_rate") {
        None | Some(Value::Null) => Err(MortgageError::MissingInput("interest_rate")),
        Some(Value::Number(n)) => n
            .as_f64()
            .map(RateInput::Number)
            .ok_or_else(|| Rejection::UnparseableRate(n.to_string()).into()),
        Some(Value::String(s)) => Ok(RateInput::Text(s.clone())),
        Some(other) => Err(Rejection::UnparseableRate(other.to_string()).into()),
    }
}
