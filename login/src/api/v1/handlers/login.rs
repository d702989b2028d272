use axum::Json;
use axum::extract::State;

use crate::api::v1::dto::{login_request::LoginRequest, token_response::TokenResponse};
use crate::error::AppError;
use crate::services::auth::password_digest;
use crate::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    // Unknown user and wrong password answer identically.
    let user = state
        .users
        .find_by_username(&req.username)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if user.password_digest != password_digest(&req.password) {
        return Err(AppError::Unauthorized);
    }

    let access_token = state.auth.sign(&user.username).map_err(|err| {
        tracing::error!(error = %err, "failed to sign access token");
        AppError::Internal
    })?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "Bearer".to_string(),
        expires_in: state.auth.ttl_seconds(),
    }))
}
