use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::{Value, json};

use crate::api::v1::dto::signup_request::SignupRequest;
use crate::error::AppError;
use crate::repos::user_repo::{UserLookup, UserRecord};
use crate::services::auth::password_digest;
use crate::state::AppState;

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let (username, email, password) = req
        .validate()
        .map_err(|msg| AppError::InvalidRequest(msg.to_string()))?;

    let record = UserRecord {
        username: username.to_string(),
        email: email.to_string(),
        password_digest: password_digest(password),
    };

    match state.users.create(record).await? {
        UserLookup::NotFound => Ok((
            StatusCode::CREATED,
            Json(json!({"message": "User created"})),
        )),
        UserLookup::UsernameTaken => Err(AppError::Conflict("Username")),
        UserLookup::EmailTaken => Err(AppError::Conflict("Email")),
    }
}
