use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use axum_extra::extract::WithRejection;

use super::OrderRequest;
use crate::domain::access::models::Principal;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::order_data;
use crate::inbound::http::handlers::OrderData;
use crate::inbound::http::router::AppState;

pub async fn create_order(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(body), _): WithRejection<Json<OrderRequest>, ApiError>,
) -> Result<ApiSuccess<OrderData>, ApiError> {
    let order = state
        .order_service
        .create_order(&principal, body.try_into_details()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        order_data(&state, &order).await?,
    ))
}
