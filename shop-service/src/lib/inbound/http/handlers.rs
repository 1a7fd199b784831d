pub mod login;
pub mod orders;
pub mod products;
pub mod users;

use std::collections::HashMap;
use std::collections::HashSet;

use axum::extract::rejection::FormRejection;
use axum::extract::rejection::JsonRejection;
use axum::extract::rejection::PathRejection;
use axum::extract::rejection::QueryRejection;
use axum::extract::rejection::StringRejection;
use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::access::errors::AccessDenied;
use crate::domain::access::errors::AuthError;
use crate::domain::order::models::Order;
use crate::domain::page::Page;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductId;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;
use crate::order::errors::OrderError;
use crate::product::errors::ProductError;
use crate::user::errors::UserError;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
    /// Extractor rejection other than a validation failure, with axum's status.
    Rejected(StatusCode, String),
}

impl ApiError {
    /// Rejection for a missing, malformed or unacceptable bearer token.
    pub fn invalid_token() -> Self {
        ApiError::Unauthorized("Could not validate credentials".to_string())
    }

    /// Keep the status axum picked for an extractor rejection.
    fn rejected(status: StatusCode, detail: String) -> Self {
        match status {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::UnprocessableEntity(detail),
            status if status.is_server_error() => ApiError::InternalServerError(detail),
            status => ApiError::Rejected(status, detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            ApiError::Rejected(status, msg) => (status, msg),
        };

        let mut response = (status, Json(ApiErrorData { detail: message })).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<StringRejection> for ApiError {
    fn from(rejection: StringRejection) -> Self {
        Self::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<AccessDenied> for ApiError {
    fn from(err: AccessDenied) -> Self {
        match err {
            AccessDenied::NotFound { .. } => ApiError::NotFound(err.to_string()),
            AccessDenied::Forbidden => ApiError::Forbidden(err.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::Access(denied) => denied.into(),
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidUserId(_) => ApiError::BadRequest(err.to_string()),
            UserError::InvalidFullName(_)
            | UserError::InvalidEmail(_)
            | UserError::InvalidPassword(_) => ApiError::UnprocessableEntity(err.to_string()),
            UserError::Password(_) | UserError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::Access(denied) => denied.into(),
            ProductError::InvalidProductId(_) => ApiError::BadRequest(err.to_string()),
            ProductError::InvalidName(_)
            | ProductError::InvalidPrice(_)
            | ProductError::InvalidCsvRow { .. } => ApiError::UnprocessableEntity(err.to_string()),
            ProductError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::Access(denied) => denied.into(),
            OrderError::InvalidOrderId(_) => ApiError::BadRequest(err.to_string()),
            OrderError::InvalidQuantity(_) | OrderError::ProductNotFound(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            OrderError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => ApiError::Forbidden(err.to_string()),
            AuthError::TokenIssuance(_) => ApiError::InternalServerError(err.to_string()),
            AuthError::User(err) => err.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub detail: String,
}

/// `limit` and `skip` query parameters shared by the list endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<u32>,
    pub skip: Option<u32>,
}

impl From<&PageQuery> for Page {
    fn from(query: &PageQuery) -> Self {
        Page::new(query.limit, query.skip)
    }
}

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub fullname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            fullname: user.fullname.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

/// A product with its owner embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: i32,
    pub in_stock: bool,
    pub owner_id: i64,
    pub owner: UserData,
    pub created_at: DateTime<Utc>,
}

impl ProductData {
    pub fn new(product: &Product, owner: &User) -> Self {
        Self {
            id: product.id.0,
            name: product.details.name.as_str().to_string(),
            description: product.details.description.clone(),
            price: product.details.price.amount(),
            in_stock: product.details.in_stock,
            owner_id: product.owner_id.0,
            owner: owner.into(),
            created_at: product.created_at,
        }
    }
}

/// An order with its owner and product embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderData {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
    pub owner_id: i64,
    pub owner: UserData,
    pub product: ProductData,
    pub created_at: DateTime<Utc>,
}

impl OrderData {
    pub fn new(order: &Order, owner: &User, product: ProductData) -> Self {
        Self {
            id: order.id.0,
            product_id: order.details.product_id.0,
            quantity: order.details.quantity.value(),
            owner_id: order.owner_id.0,
            owner: owner.into(),
            product,
            created_at: order.created_at,
        }
    }
}

/// Load each distinct user in `ids` with a single lookup.
async fn users_by_id(
    state: &AppState,
    ids: impl IntoIterator<Item = UserId>,
) -> Result<HashMap<UserId, User>, ApiError> {
    let ids: Vec<UserId> = ids.into_iter().collect::<HashSet<_>>().into_iter().collect();
    let users = state.user_service.get_users(&ids).await?;
    Ok(users.into_iter().map(|user| (user.id, user)).collect())
}

fn owner<'a>(owners: &'a HashMap<UserId, User>, id: UserId) -> Result<&'a User, ApiError> {
    owners
        .get(&id)
        .ok_or_else(|| ApiError::InternalServerError(format!("Owner {} vanished", id)))
}

fn single<T>(items: Vec<T>) -> Result<T, ApiError> {
    items
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::InternalServerError("Response lost its record".to_string()))
}

/// Render products with their owners.
pub async fn products_data(
    state: &AppState,
    products: &[Product],
) -> Result<Vec<ProductData>, ApiError> {
    let owners = users_by_id(state, products.iter().map(|p| p.owner_id)).await?;

    products
        .iter()
        .map(|product| -> Result<ProductData, ApiError> {
            Ok(ProductData::new(product, owner(&owners, product.owner_id)?))
        })
        .collect()
}

pub async fn product_data(state: &AppState, product: &Product) -> Result<ProductData, ApiError> {
    single(products_data(state, std::slice::from_ref(product)).await?)
}

/// Render orders with their owners and products. The product owners are
/// fetched in the same user lookup as the order owners.
pub async fn orders_data(state: &AppState, orders: &[Order]) -> Result<Vec<OrderData>, ApiError> {
    let product_ids: Vec<ProductId> = orders
        .iter()
        .map(|o| o.details.product_id)
        .collect::<HashSet<_>>()
        .into_iter()
        .collect();
    let products: HashMap<ProductId, Product> = state
        .product_service
        .get_products(&product_ids)
        .await?
        .into_iter()
        .map(|product| (product.id, product))
        .collect();

    let owners = users_by_id(
        state,
        orders
            .iter()
            .map(|o| o.owner_id)
            .chain(products.values().map(|p| p.owner_id)),
    )
    .await?;

    orders
        .iter()
        .map(|order| -> Result<OrderData, ApiError> {
            let product = products.get(&order.details.product_id).ok_or_else(|| {
                ApiError::InternalServerError(format!(
                    "Product {} vanished",
                    order.details.product_id
                ))
            })?;
            let product = ProductData::new(product, owner(&owners, product.owner_id)?);
            Ok(OrderData::new(order, owner(&owners, order.owner_id)?, product))
        })
        .collect()
}

pub async fn order_data(state: &AppState, order: &Order) -> Result<OrderData, ApiError> {
    single(orders_data(state, std::slice::from_ref(order)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_statuses() {
        let not_found = ApiError::from(ProductError::Access(AccessDenied::NotFound {
            kind: "Product",
            id: "4".to_string(),
        }));
        assert_eq!(
            not_found,
            ApiError::NotFound("Product with id: 4 was not found".to_string())
        );

        let forbidden = ApiError::from(OrderError::Access(AccessDenied::Forbidden));
        assert!(matches!(forbidden, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_missing_product_for_order_is_unprocessable() {
        let err = ApiError::from(OrderError::ProductNotFound(ProductId(9)));
        assert!(matches!(err, ApiError::UnprocessableEntity(_)));
    }

    #[test]
    fn test_unauthorized_carries_bearer_challenge() {
        let response = ApiError::invalid_token().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_rejections_keep_status_with_detail_body() {
        assert!(matches!(
            ApiError::rejected(StatusCode::UNPROCESSABLE_ENTITY, "missing field".to_string()),
            ApiError::UnprocessableEntity(_)
        ));
        assert_eq!(
            ApiError::rejected(StatusCode::BAD_REQUEST, "bad syntax".to_string()),
            ApiError::Rejected(StatusCode::BAD_REQUEST, "bad syntax".to_string())
        );

        let response =
            ApiError::rejected(StatusCode::UNSUPPORTED_MEDIA_TYPE, "no content type".to_string())
                .into_response();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[test]
    fn test_internal_error_hides_details() {
        let response =
            ApiError::from(UserError::DatabaseError("connection reset".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }
}
