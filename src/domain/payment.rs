use super::account::Account;
use crate::error::{PaymentError, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductCategory {
    Food,
    Education,
    Medicine,
    Clothes,
    Entertainment,
    Transport,
}

/// A single transfer between two accounts.
///
/// Payments are immutable once built: the store owns them after `save` and the
/// engine only ever reads them.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    from: Account,
    to: Account,
    amount: f64,
    date_time: NaiveDateTime,
    product_category: ProductCategory,
}

impl Payment {
    pub fn new(
        from: Account,
        to: Account,
        amount: f64,
        date_time: NaiveDateTime,
        product_category: ProductCategory,
    ) -> Self {
        Self {
            from,
            to,
            amount,
            date_time,
            product_category,
        }
    }

    pub fn from(&self) -> &Account {
        &self.from
    }

    pub fn to(&self) -> &Account {
        &self.to
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn date_time(&self) -> NaiveDateTime {
        self.date_time
    }

    /// Calendar date part of `date_time`.
    pub fn date(&self) -> NaiveDate {
        self.date_time.date()
    }

    pub fn product_category(&self) -> ProductCategory {
        self.product_category
    }

    /// Checks the invariants readers enforce before a record reaches a store.
    ///
    /// Stores themselves accept anything; this is only applied at ingestion.
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(PaymentError::ValidationError(format!(
                "Amount must be a non-negative number, got {}",
                self.amount
            )));
        }
        self.from.validate()?;
        self.to.validate()
    }
}
