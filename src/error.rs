use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("Store holds no payments")]
    EmptyStore,
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;
