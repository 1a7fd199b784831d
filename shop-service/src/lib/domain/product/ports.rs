use async_trait::async_trait;

use crate::domain::access::models::Principal;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductFilter;
use crate::domain::product::models::ProductId;
use crate::product::errors::ProductError;

/// Port for product domain service operations.
#[async_trait]
pub trait ProductServicePort: Send + Sync + 'static {
    /// List products from every owner.
    async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError>;

    /// Create a product owned by the caller.
    async fn create_product(
        &self,
        principal: &Principal,
        details: ProductDetails,
    ) -> Result<Product, ProductError>;

    /// Create several products owned by the caller, all or nothing.
    async fn import_products(
        &self,
        principal: &Principal,
        products: Vec<ProductDetails>,
    ) -> Result<Vec<Product>, ProductError>;

    /// Fetch every product in `ids` regardless of owner. Unknown ids are
    /// left out.
    async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError>;

    /// Fetch one of the caller's products.
    ///
    /// # Errors
    /// * `Access(NotFound)` - Product does not exist
    /// * `Access(Forbidden)` - Product belongs to someone else
    async fn get_product(
        &self,
        principal: &Principal,
        id: &ProductId,
    ) -> Result<Product, ProductError>;

    /// Replace the fields of one of the caller's products.
    ///
    /// # Errors
    /// * `Access(NotFound)` - Product does not exist
    /// * `Access(Forbidden)` - Product belongs to someone else
    async fn update_product(
        &self,
        principal: &Principal,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<Product, ProductError>;

    /// Delete one of the caller's products and the orders placed for it.
    ///
    /// # Errors
    /// * `Access(NotFound)` - Product does not exist
    /// * `Access(Forbidden)` - Product belongs to someone else
    async fn delete_product(&self, principal: &Principal, id: &ProductId)
        -> Result<(), ProductError>;
}

/// Persistence operations for product aggregate.
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    async fn create(&self, product: NewProduct) -> Result<Product, ProductError>;

    /// Insert every product in one transaction.
    async fn create_many(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, ProductError>;

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError>;

    async fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError>;

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductError>;

    /// # Errors
    /// * `Access(NotFound)` - Product does not exist
    async fn update(&self, product: Product) -> Result<Product, ProductError>;

    /// # Errors
    /// * `Access(NotFound)` - Product does not exist
    async fn delete(&self, id: &ProductId) -> Result<(), ProductError>;
}
