use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::extract::WithRejection;

use crate::domain::access::models::Principal;
use crate::domain::product::models::ProductId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::product_data;
use crate::inbound::http::handlers::ProductData;
use crate::inbound::http::router::AppState;
use crate::product::errors::ProductError;

pub async fn get_product(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(Path(id), _): WithRejection<Path<String>, ApiError>,
) -> Result<ApiSuccess<ProductData>, ApiError> {
    let product_id = ProductId::from_string(&id).map_err(ProductError::from)?;

    let product = state
        .product_service
        .get_product(&principal, &product_id)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        product_data(&state, &product).await?,
    ))
}
