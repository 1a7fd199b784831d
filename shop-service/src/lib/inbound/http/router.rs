use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::orders::create_order;
use super::handlers::orders::delete_order;
use super::handlers::orders::get_order;
use super::handlers::orders::list_orders;
use super::handlers::orders::update_order;
use super::handlers::products::create_product;
use super::handlers::products::delete_product;
use super::handlers::products::get_product;
use super::handlers::products::list_products;
use super::handlers::products::mass_create_products;
use super::handlers::products::update_product;
use super::handlers::users::create_user;
use super::handlers::users::delete_user;
use super::handlers::users::get_user;
use super::handlers::users::update_user;
use super::middleware::authenticate as auth_middleware;
use crate::domain::access::ports::AuthServicePort;
use crate::domain::order::ports::OrderServicePort;
use crate::domain::product::ports::ProductServicePort;
use crate::domain::user::ports::UserServicePort;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthServicePort>,
    pub user_service: Arc<dyn UserServicePort>,
    pub product_service: Arc<dyn ProductServicePort>,
    pub order_service: Arc<dyn OrderServicePort>,
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/login", post(login))
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user));

    let protected_routes = Router::new()
        .route("/users/:id", put(update_user).delete(delete_user))
        .route("/products", get(list_products).post(create_product))
        .route("/products/mass-create", post(mass_create_products))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
