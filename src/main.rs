//! Mortgage Calculator CLI
//!
//! Command-line interface for one-off calculations

use anyhow::Context;
use clap::{Parser, Subcommand};
use mortgage_calc::engine::DEFAULT_INTEREST_RATE;
use mortgage_calc::{mortgage_insurance, AffordabilityRequest, MortgageEngine, MortgageRequest, PaymentSchedule};

#[derive(Debug, Parser)]
#[command(name = "mortgage_calc", version, about = "Mortgage payment and affordability calculator")]
struct Cli {
    /// Annual interest rate, percent
    #[arg(long, global = true, default_value_t = DEFAULT_INTEREST_RATE)]
    rate: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Periodic payment for a purchase
    Payment {
        #[arg(long)]
        asking_price: f64,
        #[arg(long)]
        down_payment: f64,
        /// weekly, biweekly or monthly
        #[arg(long, default_value = "monthly")]
        schedule: PaymentSchedule,
        /// Amortization period in years (5-25)
        #[arg(long)]
        years: i64,
    },
    /// Maximum mortgage a periodic payment supports
    Mortgage {
        #[arg(long)]
        payment: f64,
        #[arg(long, default_value = "monthly")]
        schedule: PaymentSchedule,
        #[arg(long)]
        years: i64,
    },
    /// Mortgage insurance for a purchase
    Insurance {
        #[arg(long)]
        asking_price: f64,
        #[arg(long)]
        down_payment: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let engine = MortgageEngine::with_rate(cli.rate)?;

    match cli.command {
        Command::Payment {
            asking_price,
            down_payment,
            schedule,
            years,
        } => {
            let request = MortgageRequest::new(asking_price, down_payment, schedule, years)?;
            let quote = engine.quote(&request).context("payment calculation failed")?;

            println!("Interest Rate:   {:.3}%", quote.interest_rate);
            println!("Insurance:       ${:.2}", quote.insurance);
            println!("Principal:       ${:.2}", quote.principal);
            println!("Payments:        {} ({} per year)", quote.payment_count, quote.payments_per_year);
            println!("Discount Factor: {:.6}", quote.discount_factor);
            println!("Payment ({}): ${:.2}", schedule, quote.payment_amount);
        }
        Command::Mortgage { payment, schedule, years } => {
            let request = AffordabilityRequest::new(payment, schedule, years)?;
            let amount = engine
                .compute_mortgage_amount(&request)
                .context("mortgage calculation failed")?;

            println!("Maximum mortgage: ${:.2}", amount);
        }
        Command::Insurance {
            asking_price,
            down_payment,
        } => {
            println!("Insurance: ${:.2}", mortgage_insurance(asking_price, down_payment));
        }
    }

    Ok(())
}
