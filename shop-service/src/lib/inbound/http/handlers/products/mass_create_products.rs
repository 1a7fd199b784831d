use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum_extra::extract::WithRejection;

use crate::domain::access::models::Principal;
use crate::domain::product::models::parse_product_csv;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::products_data;
use crate::inbound::http::handlers::ProductData;
use crate::inbound::http::router::AppState;

/// Create every product in a CSV upload, or none of them.
pub async fn mass_create_products(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    WithRejection(body, _): WithRejection<String, ApiError>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    let products = parse_product_csv(&body)?;

    tracing::debug!(rows = products.len(), "Parsed product upload");

    let products = state
        .product_service
        .import_products(&principal, products)
        .await?;

    Ok(ApiSuccess::new(
        StatusCode::CREATED,
        products_data(&state, &products).await?,
    ))
}
