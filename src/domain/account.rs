use crate::error::{PaymentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bank account identified by its number and the BIC of the holding bank.
///
/// Two accounts are the same account only when both fields match, which is what
/// every grouping and matching query relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    account_number: String,
    bic: String,
}

impl Account {
    pub fn new(account_number: impl Into<String>, bic: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            bic: bic.into(),
        }
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn bic(&self) -> &str {
        &self.bic
    }

    /// Returns true when this account is `(account_number, bic)`.
    pub fn matches(&self, account_number: &str, bic: &str) -> bool {
        self.account_number == account_number && self.bic == bic
    }

    /// Rejects accounts with a blank number or BIC.
    pub fn validate(&self) -> Result<()> {
        if self.account_number.trim().is_empty() {
            return Err(PaymentError::ValidationError(
                "Account number must not be empty".to_string(),
            ));
        }
        if self.bic.trim().is_empty() {
            return Err(PaymentError::ValidationError(format!(
                "BIC must not be empty for account {}",
                self.account_number
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.account_number, self.bic)
    }
}

/// Number of payments received by one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountInfo {
    pub account: Account,
    pub count: usize,
}

impl AccountInfo {
    pub fn new(account: Account, count: usize) -> Self {
        Self { account, count }
    }
}
