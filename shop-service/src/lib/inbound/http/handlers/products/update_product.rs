use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use axum_extra::extract::WithRejection;

use super::ProductRequest;
use crate::domain::access::models::Principal;
use crate::domain::product::models::ProductId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::product_data;
use crate::inbound::http::handlers::ProductData;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn update_product(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
    WithRejection(Json(body), _): WithRejection<Json<ProductRequest>, ApiError>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id = ProductId::from_string(&id).map_err(ProductError::from)?;
    let details = body.try_into_details()?;

    let product = state
        .product_service
        .update_product(&principal, &product_id, details)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        product_data(&state, &product).await?,
    ))
}
