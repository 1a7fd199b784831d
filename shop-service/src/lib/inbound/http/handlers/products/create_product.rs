use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use axum_extra::extract::WithRejection;

use super::ProductRequest;
use crate::domain::access::models::Principal;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::product_data;
use crate::inbound::http::handlers::ProductData;
use crate::inbound::http::router::AppState;

pub async fn create_product(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Json(body), _): WithRejection<Json<ProductRequest>, ApiError>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product = state
        .product_service
        .create_product(&principal, body.try_into_details()?)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        product_data(&state, &product).await?,
    ))
}
