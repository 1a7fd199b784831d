use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::access::models::Owned;
use crate::domain::product::models::ProductId;
use crate::domain::user::models::UserId;
use crate::order::errors::OrderIdError;
use crate::order::errors::QuantityError;

/// Order aggregate entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub details: OrderDetails,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Owned for Order {
    const KIND: &'static str = "Order";

    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

/// Order unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub i64);

impl OrderId {
    /// Parse an order ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a positive integer
    pub fn from_string(s: &str) -> Result<Self, OrderIdError> {
        match s.trim().parse::<i64>() {
            Ok(id) if id > 0 => Ok(OrderId(id)),
            _ => Err(OrderIdError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Number of units ordered, at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantity(i32);

impl Quantity {
    pub fn new(quantity: i32) -> Result<Self, QuantityError> {
        if quantity < 1 {
            return Err(QuantityError::TooSmall(quantity));
        }
        Ok(Self(quantity))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// The caller-supplied fields of an order, used for both create and full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDetails {
    pub product_id: ProductId,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub details: OrderDetails,
    pub owner_id: UserId,
}
