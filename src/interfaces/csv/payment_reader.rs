use crate::domain::account::Account;
use crate::domain::payment::{Payment, ProductCategory};
use crate::error::{PaymentError, Result};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::io::Read;

/// One flat CSV row. Accounts are split into number and BIC columns.
#[derive(Debug, Deserialize)]
struct PaymentRecord {
    from_account: String,
    from_bic: String,
    to_account: String,
    to_bic: String,
    amount: f64,
    date_time: NaiveDateTime,
    product_category: ProductCategory,
}

impl TryFrom<PaymentRecord> for Payment {
    type Error = PaymentError;

    fn try_from(record: PaymentRecord) -> Result<Self> {
        let payment = Payment::new(
            Account::new(record.from_account, record.from_bic),
            Account::new(record.to_account, record.to_bic),
            record.amount,
            record.date_time,
            record.product_category,
        );
        payment.validate()?;
        Ok(payment)
    }
}

/// Reads payments from a CSV source.
///
/// Expects the header
/// `from_account,from_bic,to_account,to_bic,amount,date_time,product_category`.
/// Whitespace around fields is trimmed.
pub struct PaymentCsvReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentCsvReader<R> {
    /// Creates a new `PaymentCsvReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads, deserializes and validates payments.
    ///
    /// A bad row only fails its own item; reading continues with the next row.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader.into_deserialize().map(|result| {
            result
                .map_err(PaymentError::from)
                .and_then(|record: PaymentRecord| Payment::try_from(record))
        })
    }
}
