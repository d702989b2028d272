use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// No server-side session to terminate; access tokens simply expire.
pub async fn logout() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"message": "Logged out"})))
}
