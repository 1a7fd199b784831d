use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::extract::WithRejection;

use crate::domain::access::models::Principal;
use crate::domain::order::models::OrderId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::order_data;
use crate::inbound::http::handlers::OrderData;
use crate::inbound::http::router::AppState;
use crate::order::errors::OrderError;

pub async fn get_order(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    let order_id = OrderId::from_string(&id).map_err(OrderError::from)?;

    let order = state
        .order_service
        .get_order(&principal, &order_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        order_data(&state, &order).await?,
    ))
}
