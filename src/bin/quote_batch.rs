//! Quote a batch of purchases from CSV
//!
//! Input columns: asking_price,down_payment,payment_schedule,amor_period
//! Output adds insurance, principal and payment amount per row; rows that
//! fail parsing or the lending rules carry the reason in the error column.

use anyhow::Context;
use clap::Parser;
use mortgage_calc::engine::DEFAULT_INTEREST_RATE;
use mortgage_calc::mortgage::{load_requests, BatchRow};
use mortgage_calc::{MortgageEngine, PaymentQuote};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "quote_batch", version, about = "Quote mortgage payments for a CSV of purchases")]
struct Args {
    /// Input CSV file
    #[arg(long, short)]
    input: PathBuf,

    /// Output CSV file
    #[arg(long, short, default_value = "batch_quotes.csv")]
    output: PathBuf,

    /// Annual interest rate, percent
    #[arg(long, env = "MORTGAGE_INITIAL_RATE", default_value_t = DEFAULT_INTEREST_RATE)]
    rate: f64,
}

/// One output row
#[derive(Debug, Serialize)]
struct QuoteRow {
    row: usize,
    asking_price: Option<f64>,
    down_payment: Option<f64>,
    payment_schedule: Option<String>,
    amor_period: Option<i64>,
    insurance: Option<f64>,
    principal: Option<f64>,
    payment_amount: Option<f64>,
    error: Option<String>,
}

impl QuoteRow {
    fn from_result(batch_row: &BatchRow, quote: Result<PaymentQuote, String>) -> Self {
        let request = batch_row.request.as_ref().ok();
        let (quote, error) = match quote {
            Ok(q) => (Some(q), None),
            Err(e) => (None, Some(e)),
        };

        Self {
            row: batch_row.row,
            asking_price: request.map(|r| r.asking_price),
            down_payment: request.map(|r| r.down_payment),
            payment_schedule: request.map(|r| r.payment_schedule.to_string()),
            amor_period: request.map(|r| r.amortization_years),
            insurance: quote.map(|q| q.insurance),
            principal: quote.map(|q| q.principal),
            payment_amount: quote.map(|q| q.payment_amount),
            error,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let start = Instant::now();

    let rows = load_requests(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;
    println!("Loaded {} rows from {} in {:?}", rows.len(), args.input.display(), start.elapsed());

    let engine = MortgageEngine::with_rate(args.rate)?;

    let results: Vec<QuoteRow> = rows
        .par_iter()
        .map(|batch_row| {
            let quote = match &batch_row.request {
                Ok(request) => engine.quote(request).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            QuoteRow::from_result(batch_row, quote)
        })
        .collect();

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for row in &results {
        writer.serialize(row)?;
    }
    writer.flush()?;

    let failed = results.iter().filter(|r| r.error.is_some()).count();
    println!("Quoted {} rows ({} rejected) at {}%", results.len() - failed, failed, args.rate);
    println!("Output written to {}", args.output.display());
    println!("Total time: {:?}", start.elapsed());

    Ok(())
}
