use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use payment_analytics::application::engine::PaymentEngine;
use payment_analytics::interfaces::{InputFormat, load_batch};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments file (JSON array or CSV)
    input: PathBuf,

    /// Input format. Inferred from the file extension when omitted.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    #[command(subcommand)]
    query: Query,
}

#[derive(Subcommand)]
enum Query {
    /// Payments strictly between START and END
    InPeriod { start: NaiveDateTime, end: NaiveDateTime },
    /// Money spent on food strictly between START and END
    SpentOnFood { start: NaiveDateTime, end: NaiveDateTime },
    /// Categories whose total spend exceeds PLANNED
    SpentMoreThanPlanned {
        #[arg(allow_negative_numbers = true)]
        planned: f64,
    },
    /// Payments sent from an account, grouped by category
    GroupedByCategory { account_number: String, bic: String },
    /// Payments whose sender and recipient differ
    BetweenDifferentAccounts,
    /// Sum of payments strictly between START and END
    SumInPeriod { start: NaiveDateTime, end: NaiveDateTime },
    /// Dates on which the biggest payment was made
    BiggestPaymentDays,
    /// Date of the first biggest payment in input order
    FirstBiggestPaymentDay,
    /// Number of payments received per account
    CountsPerAccount,
    /// Number of payments received by an account
    PaymentsCount { account_number: String, bic: String },
}

fn main() -> Result<()> {
    payment_analytics::init_tracing();
    let cli = Cli::parse();

    let batch = load_batch(&cli.input, cli.format).into_diagnostic()?;
    if batch.rejected > 0 {
        eprintln!("Skipped {} invalid payment record(s)", batch.rejected);
    }

    let mut engine = PaymentEngine::new();
    engine.clear();
    engine.save(batch.payments);
    run(&engine, cli.query)
}

fn run(engine: &PaymentEngine, query: Query) -> Result<()> {
    match query {
        Query::InPeriod { start, end } => render(&engine.find_all_in_period(start, end)),
        Query::SpentOnFood { start, end } => render(&engine.spent_on_food(start, end)),
        Query::SpentMoreThanPlanned { planned } => {
            render(&engine.spent_more_than_planned(planned))
        }
        Query::GroupedByCategory {
            account_number,
            bic,
        } => render(&engine.grouped_by_category(&account_number, &bic)),
        Query::BetweenDifferentAccounts => render(&engine.payments_between_different_accounts()),
        Query::SumInPeriod { start, end } => render(&engine.payment_sum_in_period(start, end)),
        Query::BiggestPaymentDays => {
            render(&engine.find_days_with_biggest_payment().into_diagnostic()?)
        }
        Query::FirstBiggestPaymentDay => {
            render(&engine.find_first_day_with_biggest_payment().into_diagnostic()?)
        }
        Query::CountsPerAccount => render(&engine.find_payments_count_for_account()),
        Query::PaymentsCount {
            account_number,
            bic,
        } => render(&engine.payments_count(&account_number, &bic)),
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value).into_diagnostic()?;
    writeln!(out).into_diagnostic()?;
    Ok(())
}
