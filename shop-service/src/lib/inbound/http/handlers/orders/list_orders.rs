use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::orders_data;
use crate::inbound::http::handlers::OrderData;
use crate::inbound::http::handlers::PageQuery;
use crate::inbound::http::router::AppState;

pub async fn list_orders(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<PageQuery>, ApiError>,
) -> Result<ApiSuccess<Vec<OrderData>>, ApiError> {
    let orders = state.order_service.list_orders((&query).into()).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        orders_data(&state, &orders).await?,
    ))
}
