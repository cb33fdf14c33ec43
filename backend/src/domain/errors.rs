//! Error types raised by the ledger.

/// Why a submitted transaction form was rejected
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Amount is not a valid number: {0}")]
    InvalidAmount(String),
    #[error("Amount cannot be zero")]
    ZeroAmount,
    #[error("Amount cannot exceed {0}")]
    AmountTooLarge(f64),
    #[error("Category cannot be empty")]
    EmptyCategory,
    #[error("Date cannot be empty")]
    EmptyDate,
    #[error("Date must be a valid YYYY-MM-DD date: {0}")]
    InvalidDate(String),
    #[error("Type cannot be empty")]
    EmptyType,
    #[error("Type must be income or expense, got {0:?}")]
    InvalidType(String),
}

/// Failure talking to the backing key-value store
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to read stored transactions: {0}")]
    Read(String),
    #[error("Stored transactions are corrupted: {0}")]
    Corrupt(String),
    #[error("Failed to save transactions: {0}")]
    Write(String),
}
