use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VendingError {
    #[error("Invalid amount: {0} (amounts must not be negative)")]
    InvalidAmount(Decimal),
    #[error("Amount overflow: adding {0} exceeds the largest representable balance")]
    AmountOverflow(Decimal),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

pub type Result<T> = std::result::Result<T, VendingError>;

/// Rejects negative amounts, returning the amount unchanged otherwise.
pub(crate) fn ensure_non_negative(amount: Decimal) -> Result<Decimal> {
    if amount < Decimal::ZERO {
        Err(VendingError::InvalidAmount(amount))
    } else {
        Ok(amount)
    }
}
