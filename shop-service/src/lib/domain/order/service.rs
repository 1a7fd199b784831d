use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::guard::authorize;
use crate::domain::access::models::Principal;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderDetails;
use crate::domain::order::models::OrderId;
use crate::domain::page::Page;
use crate::domain::product::models::ProductId;
use crate::order::errors::OrderError;
use crate::order::ports::OrderRepository;
use crate::order::ports::OrderServicePort;
use crate::product::ports::ProductRepository;

pub struct OrderService<OR, PR>
where
    OR: OrderRepository,
    PR: ProductRepository,
{
    repository: Arc<OR>,
    product_repository: Arc<PR>,
}

impl<OR, PR> OrderService<OR, PR>
where
    OR: OrderRepository,
    PR: ProductRepository,
{
    pub fn new(repository: Arc<OR>, product_repository: Arc<PR>) -> Self {
        Self {
            repository,
            product_repository,
        }
    }

    async fn find_owned(&self, principal: &Principal, id: &OrderId) -> Result<Order, OrderError> {
        let order = self.repository.find_by_id(id).await?;
        Ok(authorize(principal, id, order)?)
    }

    /// Any user may order any product, so only existence is checked here.
    async fn ensure_product_exists(&self, id: &ProductId) -> Result<(), OrderError> {
        let product = self
            .product_repository
            .find_by_id(id)
            .await
            .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        match product {
            Some(_) => Ok(()),
            None => Err(OrderError::ProductNotFound(*id)),
        }
    }
}

#[async_trait]
impl<OR, PR> OrderServicePort for OrderService<OR, PR>
where
    OR: OrderRepository,
    PR: ProductRepository,
{
    async fn list_orders(&self, page: Page) -> Result<Vec<Order>, OrderError> {
        self.repository.list(&page).await
    }

    async fn create_order(
        &self,
        principal: &Principal,
        details: OrderDetails,
    ) -> Result<Order, OrderError> {
        self.ensure_product_exists(&details.product_id).await?;

        let order = self
            .repository
            .create(NewOrder {
                details,
                owner_id: principal.id,
            })
            .await?;

        tracing::info!(
            order_id = %order.id,
            product_id = %order.details.product_id,
            owner_id = %order.owner_id,
            "Order created"
        );

        Ok(order)
    }

    async fn get_order(&self, principal: &Principal, id: &OrderId) -> Result<Order, OrderError> {
        self.find_owned(principal, id).await
    }

    async fn update_order(
        &self,
        principal: &Principal,
        id: &OrderId,
        details: OrderDetails,
    ) -> Result<Order, OrderError> {
        let mut order = self.find_owned(principal, id).await?;
        self.ensure_product_exists(&details.product_id).await?;
        order.details = details;

        self.repository.update(order).await
    }

    async fn delete_order(&self, principal: &Principal, id: &OrderId) -> Result<(), OrderError> {
        self.find_owned(principal, id).await?;
        self.repository.delete(id).await?;

        tracing::info!(order_id = %id, "Order deleted");

        Ok(())
    }
}
