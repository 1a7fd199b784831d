use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::extract::WithRejection;

use crate::domain::access::models::Principal;
use crate::domain::order::models::OrderId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;
use crate::order::errors::OrderError;

pub async fn delete_order(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
) -> Result<StatusCode, ApiError> {
    let order_id = OrderId::from_string(&id).map_err(OrderError::from)?;

    state
        .order_service
        .delete_order(&principal, &order_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
