use axum::Json;
use axum::extract::State;

use crate::api::v1::dto::validate::{ValidateRequest, ValidateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Gateway-facing validation. Any failure collapses to 401; the gateway only
/// distinguishes "the authority rejected the token" from "the authority did
/// not answer".
pub async fn validate(
    State(state): State<AppState>,
    Json(req): Json<ValidateRequest>,
) -> Result<Json<ValidateResponse>, AppError> {
    let claims = state.auth.verify(&req.token).map_err(|err| {
        tracing::warn!(error = %err, "token validation failed");
        AppError::Unauthorized
    })?;

    Ok(Json(ValidateResponse {
        username: claims.sub,
    }))
}
