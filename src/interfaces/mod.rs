//! Adapters between external payment sources and the engine.

pub mod csv;
pub mod json;

use self::csv::payment_reader::PaymentCsvReader;
use self::json::payment_reader::PaymentJsonReader;
use crate::domain::payment::Payment;
use crate::error::Result;
use std::fs::File;
use std::path::Path;

/// Supported on-disk batch formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// Guesses the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// A loaded batch together with the number of records that were dropped.
#[derive(Debug, Default)]
pub struct Batch {
    pub payments: Vec<Payment>,
    pub rejected: usize,
}

/// Reads every payment in `path`, skipping records that fail to parse or validate.
///
/// Rejected records are logged and counted. Failing to open the file, or a JSON
/// document that does not parse at all, is an error.
pub fn load_batch(path: &Path, format: Option<InputFormat>) -> Result<Batch> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let file = File::open(path)?;
    tracing::debug!(path = %path.display(), ?format, "Loading payments");

    let batch = match format {
        InputFormat::Json => collect(PaymentJsonReader::new(file).payments()?),
        InputFormat::Csv => collect(PaymentCsvReader::new(file).payments()),
    };

    tracing::info!(
        loaded = batch.payments.len(),
        rejected = batch.rejected,
        "Payments loaded"
    );
    Ok(batch)
}

fn collect(records: impl Iterator<Item = Result<Payment>>) -> Batch {
    let mut batch = Batch::default();
    for (index, record) in records.enumerate() {
        match record {
            Ok(payment) => batch.payments.push(payment),
            Err(e) => {
                tracing::warn!(record = index + 1, error = %e, "Skipping payment record");
                batch.rejected += 1;
            }
        }
    }
    batch
}
