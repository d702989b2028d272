use axum::Json;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use serde_json::json;

/// Accepts a request forwarded by the gateway. Identity arrives in the
/// `UserID` header the gateway derives from the validated token; any request
/// body is accepted and ignored.
pub async fn message(headers: HeaderMap) -> impl IntoResponse {
    let Some(user) = headers.get("UserID").and_then(|v| v.to_str().ok()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "UserID header is missing"})),
        );
    };

    (
        StatusCode::OK,
        Json(json!({"user": user, "message": "Message received"})),
    )
}
