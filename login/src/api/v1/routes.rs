use axum::{Router, routing::post};

use crate::api::v1::handlers::{login::login, logout::logout, signup::signup};
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/signup", post(signup))
        .route("/logout", post(logout))
        .with_state(state)
}
