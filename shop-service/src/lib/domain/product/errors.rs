use thiserror::Error;

use crate::domain::access::errors::AccessDenied;

/// Error type for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid product id: {0}")]
    InvalidFormat(String),
}

/// Error type for ProductName validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductNameError {
    #[error("Product name is empty")]
    Empty,

    #[error("Product name too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error type for Price validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PriceError {
    #[error("Price must not be negative, got {0}")]
    Negative(i32),
}

/// Top-level error type for all product-related operations
#[derive(Debug, Clone, Error)]
pub enum ProductError {
    #[error("Invalid product ID: {0}")]
    InvalidProductId(#[from] ProductIdError),

    #[error("Invalid product name: {0}")]
    InvalidName(#[from] ProductNameError),

    #[error("Invalid price: {0}")]
    InvalidPrice(#[from] PriceError),

    #[error("Invalid CSV row on line {line}: {reason}")]
    InvalidCsvRow { line: usize, reason: String },

    #[error(transparent)]
    Access(#[from] AccessDenied),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
