use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::access::errors::AccessDenied;
use crate::domain::access::models::Owned;
use crate::domain::order::models::NewOrder;
use crate::domain::order::models::Order;
use crate::domain::order::models::OrderDetails;
use crate::domain::order::models::OrderId;
use crate::domain::order::models::Quantity;
use crate::domain::order::ports::OrderRepository;
use crate::domain::page::Page;
use crate::domain::product::models::ProductId;
use crate::domain::user::models::UserId;
use crate::order::errors::OrderError;

pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct OrderRow {
    id: i64,
    product_id: i64,
    quantity: i32,
    owner_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<OrderRow> for Order {
    type Error = OrderError;

    fn try_from(row: OrderRow) -> Result<Self, Self::Error> {
        Ok(Order {
            id: OrderId(row.id),
            details: OrderDetails {
                product_id: ProductId(row.product_id),
                quantity: Quantity::new(row.quantity)?,
            },
            owner_id: UserId(row.owner_id),
            created_at: row.created_at,
        })
    }
}

/// Foreign key from `orders.product_id`, named in the migration.
const PRODUCT_FOREIGN_KEY: &str = "orders_product_id_fkey";

/// Map a write failure. The product can disappear between the service's
/// existence check and the statement, which surfaces as a violation of
/// [`PRODUCT_FOREIGN_KEY`]. Any other constraint stays a database error.
fn write_error(e: sqlx::Error, product_id: ProductId) -> OrderError {
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_foreign_key_violation() && db_err.constraint() == Some(PRODUCT_FOREIGN_KEY)
        {
            return OrderError::ProductNotFound(product_id);
        }
    }
    OrderError::DatabaseError(e.to_string())
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, order: NewOrder) -> Result<Order, OrderError> {
        sqlx::query_as::<_, OrderRow>(
            r#"
            INSERT INTO orders (product_id, quantity, owner_id)
            VALUES ($1, $2, $3)
            RETURNING id, product_id, quantity, owner_id, created_at
            "#,
        )
        .bind(order.details.product_id.0)
        .bind(order.details.quantity.value())
        .bind(order.owner_id.0)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, order.details.product_id))?
        .try_into()
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, product_id, quantity, owner_id, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        row.map(Order::try_from).transpose()
    }

    async fn list(&self, page: &Page) -> Result<Vec<Order>, OrderError> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, product_id, quantity, owner_id, created_at
            FROM orders
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(page.limit))
        .bind(i64::from(page.skip))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        rows.into_iter().map(Order::try_from).collect()
    }

    async fn update(&self, order: Order) -> Result<Order, OrderError> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            UPDATE orders
            SET product_id = $2, quantity = $3
            WHERE id = $1
            RETURNING id, product_id, quantity, owner_id, created_at
            "#,
        )
        .bind(order.id.0)
        .bind(order.details.product_id.0)
        .bind(order.details.quantity.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, order.details.product_id))?;

        match row {
            Some(row) => row.try_into(),
            None => Err(AccessDenied::NotFound {
                kind: Order::KIND,
                id: order.id.to_string(),
            }
            .into()),
        }
    }

    async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        let result = sqlx::query(
            r#"
            DELETE FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| OrderError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccessDenied::NotFound {
                kind: Order::KIND,
                id: id.to_string(),
            }
            .into());
        }

        Ok(())
    }
}
