use crate::domain::payment::Payment;
use crate::error::Result;
use std::io::{BufReader, Read};

/// Reads a JSON array of payments.
///
/// The document is parsed as a whole, so a syntax error fails the entire read.
/// Individual records that parse but break a payment invariant are reported
/// one by one.
pub struct PaymentJsonReader<R: Read> {
    source: BufReader<R>,
}

impl<R: Read> PaymentJsonReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source: BufReader::new(source),
        }
    }

    pub fn payments(self) -> Result<impl Iterator<Item = Result<Payment>>> {
        let batch: Vec<Payment> = serde_json::from_reader(self.source)?;
        Ok(batch
            .into_iter()
            .map(|payment| payment.validate().map(|()| payment)))
    }
}
