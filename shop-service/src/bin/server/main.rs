use std::sync::Arc;

use auth::Authenticator;
use auth::TokenSettings;
use shop_service::config::Config;
use shop_service::domain::access::service::AuthService;
use shop_service::domain::order::service::OrderService;
use shop_service::domain::product::service::ProductService;
use shop_service::domain::user::service::UserService;
use shop_service::inbound::http::router::create_router;
use shop_service::inbound::http::router::AppState;
use shop_service::outbound::repositories::PostgresOrderRepository;
use shop_service::outbound::repositories::PostgresProductRepository;
use shop_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shop_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "shop-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_host = %config.database.host,
        database_name = %config.database.name,
        http_port = config.server.http_port,
        jwt_algorithm = %config.jwt.algorithm,
        "Configuration loaded"
    );

    let token_settings = TokenSettings::new(
        config.jwt.secret.as_bytes(),
        &config.jwt.algorithm,
        config.jwt.expiration_minutes,
    )?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(config.database.connect_options())
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::new(&token_settings));
    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool.clone()));
    let order_repository = Arc::new(PostgresOrderRepository::new(pg_pool));

    let state = AppState {
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&user_repository),
            authenticator,
        )),
        user_service: Arc::new(UserService::new(user_repository)),
        product_service: Arc::new(ProductService::new(Arc::clone(&product_repository))),
        order_service: Arc::new(OrderService::new(order_repository, product_repository)),
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    tracing::info!("Server exited");

    Ok(())
}
