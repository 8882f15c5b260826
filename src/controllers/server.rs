use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::config::AppConfig;
use crate::controllers::{health, inquiry};
use crate::services::inquiry_service::InquiryService;
use crate::services::register_service::ServiceRegister;

pub fn app(services: ServiceRegister) -> Router {
    Router::new()
        .merge(health::router())
        .merge(inquiry::router())
        .with_state(services) // Inject services into handlers as state
        .layer(
            ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                    .allow_headers([AUTHORIZATION, ACCEPT, CONTENT_TYPE])
                    .allow_origin(cors::Any),
            ),
        )
}

pub async fn serve(
    config: Arc<AppConfig>,
    inquiry_service: InquiryService,
) -> anyhow::Result<()> {
    // Register Services to be used in handlers
    let services = ServiceRegister::new(inquiry_service);

    let addr = format!("{}:{}", config.server_host, config.server_port)
        .parse::<SocketAddr>()
        .context("Invalid server address")?;

    info!("Starting server at {}", addr);

    axum::Server::bind(&addr)
        .serve(app(services).into_make_service())
        .await
        .context("Error starting server")
}
