//! HTTP API over the mortgage engine
//!
//! Routes:
//! - `GET /payment-amount?asking_price=&down_payment=&payment_schedule=&amor_period=`
//! - `GET /mortgage-amount?payment_amount=&payment_schedule=&amor_period=`
//! - `GET /interest-rate`, `PATCH /interest-rate` with `{"interest_rate": <number>}`
//! - `GET /health`
//!
//! Failures are 400 responses with a body of the form `{"Error": "<message>"}`.

mod handlers;
mod response;

pub use response::{ApiError, Endpoint, CHECK_INPUT, DOWN_PAYMENT_REJECTED, SOMETHING_WENT_WRONG};

use crate::engine::MortgageEngine;
use axum::http::Method;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<MortgageEngine>,
}

impl AppState {
    pub fn new(engine: MortgageEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::PATCH, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/payment-amount", get(handlers::payment_amount))
        .route("/mortgage-amount", get(handlers::mortgage_amount))
        .route(
            "/interest-rate",
            get(handlers::current_interest_rate).patch(handlers::update_interest_rate),
        )
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> (Router, AppState) {
        let state = AppState::new(MortgageEngine::new());
        (router(state.clone()), state)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        send(app, request).await
    }

    async fn patch_rate(app: Router, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::PATCH)
            .uri("/interest-rate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        send(app, request).await
    }

    #[tokio::test]
    async fn test_payment_amount_succeed() {
        let (app, _) = app();
        let (status, body) = get_json(
            app,
            "/payment-amount?asking_price=50000&down_payment=20000&payment_schedule=monthly&amor_period=6",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "payment_amount": 449.13 }));
    }

    #[tokio::test]
    async fn test_payment_amount_missing_input() {
        let (app, _) = app();
        let (status, body) = get_json(app, "/payment-amount?asking_price=50000&payment_schedule=monthly&amor_period=6").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": CHECK_INPUT }));
    }

    #[tokio::test]
    async fn test_payment_amount_unparseable_input() {
        let (app, _) = app();
        let (status, body) = get_json(
            app,
            "/payment-amount?asking_price=lots&down_payment=20000&payment_schedule=monthly&amor_period=6",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], CHECK_INPUT);
    }

    #[tokio::test]
    async fn test_payment_amount_rejected() {
        let (app, _) = app();
        let (status, body) = get_json(
            app,
            "/payment-amount?asking_price=500000&down_payment=24999.99&payment_schedule=monthly&amor_period=25",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], DOWN_PAYMENT_REJECTED);

        let (app, _) = self::app();
        let (status, body) = get_json(
            app,
            "/payment-amount?asking_price=50000&down_payment=20000&payment_schedule=monthly&amor_period=26",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], DOWN_PAYMENT_REJECTED);
    }

    #[tokio::test]
    async fn test_mortgage_amount_succeed() {
        let (app, _) = app();
        let (status, body) = get_json(app, "/mortgage-amount?payment_amount=449.13&payment_schedule=monthly&amor_period=6").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "mortage_amount": 29999.95 }));
    }

    #[tokio::test]
    async fn test_mortgage_amount_fail() {
        let (app, _) = app();
        let (status, body) = get_json(app, "/mortgage-amount?payment_amount=449.13&payment_schedule=monthly&amor_period=1").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": SOMETHING_WENT_WRONG }));

        let (app, _) = self::app();
        let (status, body) = get_json(app, "/mortgage-amount?payment_schedule=monthly&amor_period=6").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": CHECK_INPUT }));
    }

    #[tokio::test]
    async fn test_negative_amortization_rejected() {
        let (app, _) = app();
        let (status, body) = get_json(
            app,
            "/payment-amount?asking_price=50000&down_payment=20000&payment_schedule=monthly&amor_period=-1",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": DOWN_PAYMENT_REJECTED }));

        let (app, _) = self::app();
        let (status, body) = get_json(app, "/mortgage-amount?payment_amount=449.13&payment_schedule=monthly&amor_period=-1").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": SOMETHING_WENT_WRONG }));

        // Too large for any fixed-width integer, still a range rejection
        let (app, _) = self::app();
        let (status, body) = get_json(
            app,
            "/mortgage-amount?payment_amount=449.13&payment_schedule=monthly&amor_period=99999999999999999999",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": SOMETHING_WENT_WRONG }));
    }

    #[tokio::test]
    async fn test_duplicate_query_keys_use_first_value() {
        let (app, _) = app();
        let (status, body) = get_json(
            app,
            "/mortgage-amount?payment_amount=449.13&payment_amount=1&payment_schedule=monthly&amor_period=6",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "mortage_amount": 29999.95 }));

        let (app, _) = self::app();
        let (status, body) = get_json(
            app,
            "/payment-amount?asking_price=50000&down_payment=20000&payment_schedule=monthly&amor_period=6&amor_period=abc",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "payment_amount": 449.13 }));
    }

    #[tokio::test]
    async fn test_interest_rate_succeed() {
        let (app, state) = app();
        let (status, body) = patch_rate(app, r#"{"interest_rate": 3.59}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "old_interest_rate": 2.5, "new_interest_rate": 3.59 }));
        assert_eq!(state.engine.interest_rate(), 3.59);

        // Subsequent reads see the new rate
        let (status, body) = get_json(router(state.clone()), "/interest-rate").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "interest_rate": 3.59 }));

        let (_, body) = get_json(
            router(state),
            "/payment-amount?asking_price=50000&down_payment=20000&payment_schedule=monthly&amor_period=6",
        )
        .await;
        assert_eq!(body, json!({ "payment_amount": 463.77 }));
    }

    #[tokio::test]
    async fn test_interest_rate_fail() {
        let (app, state) = app();
        let (status, body) = patch_rate(app, r#"{"interest_rate": "new_interest_rate"}"#).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": SOMETHING_WENT_WRONG }));
        assert_eq!(state.engine.interest_rate(), 2.5);
    }

    #[tokio::test]
    async fn test_interest_rate_empty_body() {
        let (app, state) = app();
        let (status, body) = patch_rate(app, "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": CHECK_INPUT }));

        let (status, body) = patch_rate(router(state.clone()), "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": CHECK_INPUT }));
        assert_eq!(state.engine.interest_rate(), 2.5);
    }

    #[tokio::test]
    async fn test_zero_rate_then_mortgage_fails() {
        let (app, state) = app();
        let (status, _) = patch_rate(app, r#"{"interest_rate": 0}"#).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = get_json(
            router(state),
            "/mortgage-amount?payment_amount=1000&payment_schedule=weekly&amor_period=25",
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["Error"], SOMETHING_WENT_WRONG);
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();
        let (status, body) = get_json(app, "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }
}
