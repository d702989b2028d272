/*
 * Responsibility
 * - gateway が proxy する URL 構造を定義
 * - 保護対象 path は config 起点 (hardcode しない)
 */
use axum::{Router, routing::post};

use crate::api::v1::handlers::message::forward_message;
use crate::config::Config;
use crate::state::AppState;

/// The proxied route is registered for POST only; axum's MethodRouter
/// answers other methods with 405.
pub fn routes(config: &Config) -> Router<AppState> {
    Router::new().route(config.message_path.as_str(), post(forward_message))
}
