use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::extract::WithRejection;

use crate::domain::access::models::Principal;
use crate::domain::product::models::ProductId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn delete_product(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
) -> Result<StatusCode, ApiError> {
    let product_id = ProductId::from_string(&id).map_err(ProductError::from)?;

    state
        .product_service
        .delete_product(&principal, &product_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
