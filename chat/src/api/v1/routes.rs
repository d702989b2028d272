use axum::{Router, routing::post};

use crate::api::v1::handlers::message::message;

pub fn routes() -> Router {
    Router::new().route("/message", post(message))
}
