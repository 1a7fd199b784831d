pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod mass_create_products;
pub mod update_product;

pub use create_product::create_product;
pub use delete_product::delete_product;
pub use get_product::get_product;
pub use list_products::list_products;
pub use mass_create_products::mass_create_products;
pub use update_product::update_product;

use serde::Deserialize;

use crate::domain::product::models::Price;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductName;
use crate::product::errors::ProductError;

/// HTTP request body for creating or replacing a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductRequest {
    name: String,
    #[serde(default)]
    description: String,
    price: i32,
    #[serde(default = "in_stock_default")]
    in_stock: bool,
}

fn in_stock_default() -> bool {
    true
}

impl ProductRequest {
    fn try_into_details(self) -> Result<ProductDetails, ProductError> {
        Ok(ProductDetails {
            name: ProductName::new(self.name)?,
            description: self.description,
            price: Price::new(self.price)?,
            in_stock: self.in_stock,
        })
    }
}
