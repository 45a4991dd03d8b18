//! Error types for FortuneReel

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum FrError {
    #[error("Catalog is empty")]
    EmptyCatalog,

    #[error("Prize not found: {0}")]
    PrizeNotFound(String),

    #[error("Cannot delete the last remaining prize")]
    LastPrize,

    #[error("Weight must be between 1 and 100, got {0}")]
    InvalidWeight(u32),

    #[error("Display value is required")]
    EmptyDisplayValue,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type FrResult<T> = Result<T, FrError>;
