use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::access::errors::AccessDenied;
use crate::domain::access::models::Owned;
use crate::domain::product::models::NewProduct;
use crate::domain::product::models::Price;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductFilter;
use crate::domain::product::models::ProductId;
use crate::domain::product::models::ProductName;
use crate::domain::product::ports::ProductRepository;
use crate::domain::user::models::UserId;
use crate::product::errors::ProductError;

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: i32,
    in_stock: bool,
    owner_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = ProductError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: ProductId(row.id),
            details: ProductDetails {
                name: ProductName::new(row.name)?,
                description: row.description,
                price: Price::new(row.price)?,
                in_stock: row.in_stock,
            },
            owner_id: UserId(row.owner_id),
            created_at: row.created_at,
        })
    }
}

/// Build an ILIKE pattern matching `search` anywhere in the name, with
/// wildcard characters in the input taken literally.
fn contains_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

fn database_error(e: sqlx::Error) -> ProductError {
    ProductError::DatabaseError(e.to_string())
}

const INSERT_PRODUCT: &str = r#"
    INSERT INTO products (name, description, price, in_stock, owner_id)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, name, description, price, in_stock, owner_id, created_at
"#;

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, ProductError> {
        sqlx::query_as::<_, ProductRow>(INSERT_PRODUCT)
            .bind(product.details.name.as_str())
            .bind(&product.details.description)
            .bind(product.details.price.amount())
            .bind(product.details.in_stock)
            .bind(product.owner_id.0)
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)?
            .try_into()
    }

    async fn create_many(&self, products: Vec<NewProduct>) -> Result<Vec<Product>, ProductError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;
        let mut created = Vec::with_capacity(products.len());

        for product in products {
            let row = sqlx::query_as::<_, ProductRow>(INSERT_PRODUCT)
                .bind(product.details.name.as_str())
                .bind(&product.details.description)
                .bind(product.details.price.amount())
                .bind(product.details.in_stock)
                .bind(product.owner_id.0)
                .fetch_one(&mut *tx)
                .await
                .map_err(database_error)?;
            created.push(Product::try_from(row)?);
        }

        tx.commit().await.map_err(database_error)?;

        Ok(created)
    }

    async fn find_by_id(&self, id: &ProductId) -> Result<Option<Product>, ProductError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, in_stock, owner_id, created_at
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        row.map(Product::try_from).transpose()
    }

    async fn find_by_ids(&self, ids: &[ProductId]) -> Result<Vec<Product>, ProductError> {
        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, in_stock, owner_id, created_at
            FROM products
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn list(&self, filter: &ProductFilter) -> Result<Vec<Product>, ProductError> {
        let pattern = filter.search.as_deref().map(contains_pattern);

        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, price, in_stock, owner_id, created_at
            FROM products
            WHERE $1::TEXT IS NULL OR name ILIKE $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern)
        .bind(i64::from(filter.page.limit))
        .bind(i64::from(filter.page.skip))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        rows.into_iter().map(Product::try_from).collect()
    }

    async fn update(&self, product: Product) -> Result<Product, ProductError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET name = $2, description = $3, price = $4, in_stock = $5
            WHERE id = $1
            RETURNING id, name, description, price, in_stock, owner_id, created_at
            "#,
        )
        .bind(product.id.0)
        .bind(product.details.name.as_str())
        .bind(&product.details.description)
        .bind(product.details.price.amount())
        .bind(product.details.in_stock)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(row) => row.try_into(),
            None => Err(AccessDenied::NotFound {
                kind: Product::KIND,
                id: product.id.to_string(),
            }
            .into()),
        }
    }

    async fn delete(&self, id: &ProductId) -> Result<(), ProductError> {
        // orders for the product go with it through ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(AccessDenied::NotFound {
                kind: Product::KIND,
                id: id.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
