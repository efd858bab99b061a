//! Load batches of mortgage requests from CSV
//!
//! Expected header: `asking_price,down_payment,payment_schedule,amor_period`.
//! A malformed row does not abort the load; its parse error is kept with the
//! row so the caller can report it next to the quotes that did succeed.

use super::MortgageRequest;
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Raw CSV row, kept as text so each field goes through the same parse step
/// as query-string input
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(default)]
    asking_price: Option<String>,
    #[serde(default)]
    down_payment: Option<String>,
    #[serde(default)]
    payment_schedule: Option<String>,
    #[serde(default, alias = "amortization_years")]
    amor_period: Option<String>,
}

impl CsvRow {
    fn to_request(&self) -> Result<MortgageRequest> {
        MortgageRequest::parse(
            self.asking_price.as_deref(),
            self.down_payment.as_deref(),
            self.payment_schedule.as_deref(),
            self.amor_period.as_deref(),
        )
    }
}

/// One data row of a batch file
#[derive(Debug, Clone)]
pub struct BatchRow {
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub request: Result<MortgageRequest>,
}

/// Load all requests from a CSV file
pub fn load_requests<P: AsRef<Path>>(path: P) -> csv::Result<Vec<BatchRow>> {
    let reader = Reader::from_path(path)?;
    collect_rows(reader)
}

/// Load requests from any reader (e.g., string buffer, stdin)
pub fn load_requests_from_reader<R: std::io::Read>(reader: R) -> csv::Result<Vec<BatchRow>> {
    collect_rows(Reader::from_reader(reader))
}

fn collect_rows<R: std::io::Read>(mut reader: Reader<R>) -> csv::Result<Vec<BatchRow>> {
    let mut rows = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let raw: CsvRow = result?;
        rows.push(BatchRow {
            row: idx + 1,
            request: raw.to_request(),
        });
    }

    log::debug!("loaded {} batch rows", rows.len());
    Ok(rows)
}
