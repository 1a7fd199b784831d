use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use serde::Deserialize;

use crate::domain::page::Page;
use crate::domain::product::models::ProductFilter;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::products_data;
use crate::inbound::http::handlers::ProductData;
use crate::inbound::http::router::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    limit: Option<u32>,
    skip: Option<u32>,
    search: Option<String>,
}

impl From<ListProductsQuery> for ProductFilter {
    fn from(query: ListProductsQuery) -> Self {
        Self {
            page: Page::new(query.limit, query.skip),
            search: query
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

pub async fn list_products(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ListProductsQuery>, ApiError>,
) -> Result<ApiSuccess<Vec<ProductData>>, ApiError> {
    let products = state.product_service.list_products(query.into()).await?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        products_data(&state, &products).await?,
    ))
}
