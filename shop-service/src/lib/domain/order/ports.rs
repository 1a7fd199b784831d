use async_trait::async_trait;

use crate::domain::access::models::Principal;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderDetails;
use crate::domain::order::models::OrderId;
use crate::domain::page::Page;
use crate::order::errors::OrderError;

/// Port for order domain service operations.
#[async_trait]
pub trait OrderServicePort: Send + Sync + 'static {
    /// List orders from every owner.
    async fn list_orders(&self, page: Page) -> Result<Vec<Order>, OrderError>;

    /// Place an order owned by the caller.
    ///
    /// # Errors
    /// * `ProductNotFound` - Referenced product does not exist
    async fn create_order(
        &self,
        principal: &Principal,
        details: OrderDetails,
    ) -> Result<Order, OrderError>;

    /// # Errors
    /// * `Access(NotFound)` - Order does not exist
    /// * `Access(Forbidden)` - Order belongs to someone else
    async fn get_order(&self, principal: &Principal, id: &OrderId) -> Result<Order, OrderError>;

    /// Replace the fields of one of the caller's orders.
    ///
    /// # Errors
    /// * `Access(NotFound)` - Order does not exist
    /// * `Access(Forbidden)` - Order belongs to someone else
    /// * `ProductNotFound` - Referenced product does not exist
    async fn update_order(
        &self,
        principal: &Principal,
        id: &OrderId,
        details: OrderDetails,
    ) -> Result<Order, OrderError>;

    /// # Errors
    /// * `Access(NotFound)` - Order does not exist
    /// * `Access(Forbidden)` - Order belongs to someone else
    async fn delete_order(&self, principal: &Principal, id: &OrderId) -> Result<(), OrderError>;
}

/// Persistence operations for order aggregate.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// # Errors
    /// * `ProductNotFound` - Referenced product vanished before the insert
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError>;

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError>;

    async fn list(&self, page: &Page) -> Result<Vec<Order>, OrderError>;

    /// # Errors
    /// * `Access(NotFound)` - Order does not exist
    /// * `ProductNotFound` - Referenced product vanished before the update
    async fn update(&self, order: Order) -> Result<Order, OrderError>;

    /// # Errors
    /// * `Access(NotFound)` - Order does not exist
    async fn delete(&self, id: &OrderId) -> Result<(), OrderError>;
}
