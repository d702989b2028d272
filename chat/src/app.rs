use axum::{Router, routing::get};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::config::Config;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> Result<(), std::io::Error> {
    init_tracing();
    let config = Config::from_env();

    tracing::info!(
        "starting chat service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let app = build_router();
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await
}

fn build_router() -> Router {
    async fn health() -> &'static str {
        "ok"
    }

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api::v1::routes())
}
