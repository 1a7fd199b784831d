use thiserror::Error;

use crate::domain::access::errors::AccessDenied;
use crate::domain::product::models::ProductId;

/// Error type for OrderId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderIdError {
    #[error("Invalid order id: {0}")]
    InvalidFormat(String),
}

/// Error type for Quantity validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QuantityError {
    #[error("Quantity must be at least 1, got {0}")]
    TooSmall(i32),
}

/// Top-level error type for all order-related operations
#[derive(Debug, Clone, Error)]
pub enum OrderError {
    #[error("Invalid order ID: {0}")]
    InvalidOrderId(#[from] OrderIdError),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// The order references a product that does not exist.
    #[error("Product with id: {0} does not exist")]
    ProductNotFound(ProductId),

    #[error(transparent)]
    Access(#[from] AccessDenied),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
