pub mod create_order;
pub mod delete_order;
pub mod get_order;
pub mod list_orders;
pub mod update_order;

pub use create_order::create_order;
pub use delete_order::delete_order;
pub use get_order::get_order;
pub use list_orders::list_orders;
pub use update_order::update_order;

use serde::Deserialize;

use crate::domain::order::models::OrderDetails;
use crate::domain::order::models::Quantity;
use crate::domain::product::models::ProductId;
use crate::order::errors::OrderError;

/// HTTP request body for placing or replacing an order (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderRequest {
    product_id: i64,
    quantity: i32,
}

impl OrderRequest {
    fn try_into_details(self) -> Result<OrderDetails, OrderError> {
        Ok(OrderDetails {
            product_id: ProductId(self.product_id),
            quantity: Quantity::new(self.quantity)?,
        })
    }
}
