//! HTTP server for the mortgage calculator
//!
//! Configuration comes from flags or the environment:
//!   MORTGAGE_HOST, PORT, MORTGAGE_INITIAL_RATE
//! Logging is controlled with RUST_LOG (defaults to `info`).

use clap::Parser;
use mortgage_calc::api::{self, AppState};
use mortgage_calc::config::ServerConfig;
use mortgage_calc::MortgageEngine;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::parse();
    let addr = config.bind_addr()?;

    let engine = MortgageEngine::with_rate(config.initial_rate)?;
    let app = api::router(AppState::new(engine));

    log::info!("mortgage calculator listening on {} (interest rate {}%)", addr, config.initial_rate);
    log::info!("Endpoints: /payment-amount, /mortgage-amount, /interest-rate, /health");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
