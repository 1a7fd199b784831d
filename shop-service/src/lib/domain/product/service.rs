use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::guard::authorize;
use crate::domain::access::models::Principal;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductFilter;
use crate::domain::product::models::ProductId;
use crate::product::errors::ProductError;
use crate::product::ports::ProductRepository;
use crate::product::ports::ProductServicePort;

pub struct ProductService<PR>
where
    PR: ProductRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProductService<PR>
where
    PR: ProductRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }

    async fn find_owned(
        &self,
        principal: &Principal,
        id: &ProductId,
    ) -> Result<Product, ProductError> {
        let product = self.repository.find_by_id(id).await?;
        Ok(authorize(principal, id, product)?)
    }
}

#[async_trait]
impl<PR> ProductServicePort for ProductService<PR>
where
    PR: ProductRepository,
{
    async fn list_products(&self, filter: ProductFilter) -> Result<Vec<Product>, ProductError> {
        self.repository.list(&filter).await
    }

    async fn create_product(
        &self,
        principal: &Principal,
        details: ProductDetails,
    ) -> Result<Product, ProductError> {
        let product = self
            .repository
            .create(NewProduct {
                details,
                owner_id: principal.id,
            })
            .await?;

        tracing::info!(product_id = %product.id, owner_id = %product.owner_id, "Product created");

        Ok(product)
    }

    async fn import_products(
        &self,
        principal: &Principal,
        products: Vec<ProductDetails>,
    ) -> Result<Vec<Product>, ProductError> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let products = self
            .repository
            .create_many(
                products
                    .into_iter()
                    .map(|details| NewProduct {
                        details,
                        owner_id: principal.id,
                    })
                    .collect(),
            )
            .await?;

        tracing::info!(count = products.len(), owner_id = %principal.id, "Products imported");

        Ok(products)
    }

    async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.repository.find_by_ids(ids).await
    }

    async fn get_product(
        &self,
        principal: &Principal,
        id: &ProductId,
    ) -> Result<Product, ProductError> {
        self.find_owned(principal, id).await
    }

    async fn update_product(
        &self,
        principal: &Principal,
        id: &ProductId,
        details: ProductDetails,
    ) -> Result<Product, ProductError> {
        let mut product = self.find_owned(principal, id).await?;
        product.details = details;

        self.repository.update(product).await
    }

    async fn delete_product(
        &self,
        principal: &Principal,
        id: &ProductId,
    ) -> Result<(), ProductError> {
        self.find_owned(principal, id).await?;
        self.repository.delete(id).await?;

        tracing::info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
