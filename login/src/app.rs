use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api;
use crate::api::v1::handlers::validate::validate;
use crate::config::Config;
use crate::error::AppError;
use crate::repos::user_repo::UserRepo;
use crate::services::auth::token_service::TokenService;
use crate::state::AppState;

fn init_tracing() {
    // Prefer RUST_LOG if set; otherwise use a sensible default.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn run() -> Result<(), AppError> {
    init_tracing();
    let config = Config::from_env()?;

    tracing::info!(
        "starting login service in {:?} mode on {}",
        config.app_env,
        config.addr
    );

    let state = build_state(&config);
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .map_err(|_| AppError::Internal)?;
    axum::serve(listener, app)
        .await
        .map_err(|_| AppError::Internal)?;

    Ok(())
}

fn build_state(config: &Config) -> AppState {
    let auth = TokenService::new(&config.jwt_secret, config.access_token_ttl_seconds);
    let users = UserRepo::new(config.users_db_path.clone());

    AppState::new(Arc::new(auth), Arc::new(users))
}

fn build_router(state: AppState) -> Router {
    async fn health() -> &'static str {
        "ok"
    }

    // `/validate` sits at the root, not under /api/v1: it is the
    // gateway-facing endpoint (AUTH_VALIDATION_PATH), not part of the
    // client-facing API.
    Router::new()
        .route("/health", get(health))
        .route("/validate", post(validate))
        .nest("/api/v1", api::v1::routes(state.clone()))
        .with_state(state)
}
