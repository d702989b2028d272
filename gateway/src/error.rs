/*
 * Responsibility
 * - gateway 共通の AppError 定義
 * - IntoResponse 実装 (HTTP status / JSON error body)
 * - AuthError / ForwardError を HTTP 境界で統一的に変換
 */
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::forward::ForwardError;
use crate::services::token_validator::AuthError;

/// Everything this gateway can answer a caller with when a request does not
/// make it to the downstream service. The rejection body keeps the
/// `{"message": ...}` shape the services behind the gateway use.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Token is missing")]
    MissingToken,

    #[error("Malformed Authorization header")]
    MalformedAuthHeader,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Authentication service unavailable")]
    AuthServiceUnavailable,

    #[error("Chat service unavailable")]
    ChatServiceUnavailable,

    #[error("internal server error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorResponseBody {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingToken | AppError::MalformedAuthHeader | AppError::InvalidToken => {
                StatusCode::UNAUTHORIZED
            }
            AppError::AuthServiceUnavailable | AppError::ChatServiceUnavailable => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponseBody {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        match e {
            // The authority answered: a caller problem (401).
            AuthError::Rejected { .. } | AuthError::MalformedResponse(_) => AppError::InvalidToken,
            // The authority did not answer: an upstream outage (502).
            AuthError::Unreachable(_) => AppError::AuthServiceUnavailable,
        }
    }
}

impl From<ForwardError> for AppError {
    fn from(e: ForwardError) -> Self {
        match e {
            ForwardError::Unreachable(_) => AppError::ChatServiceUnavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_rejections_map_to_401() {
        let err: AppError = AuthError::Rejected {
            status: StatusCode::UNAUTHORIZED,
        }
        .into();
        assert!(matches!(err, AppError::InvalidToken));
    }

    #[test]
    fn rejection_messages_are_distinct() {
        assert_ne!(
            AppError::MissingToken.to_string(),
            AppError::InvalidToken.to_string()
        );
        assert_ne!(
            AppError::MissingToken.to_string(),
            AppError::MalformedAuthHeader.to_string()
        );
    }
}
