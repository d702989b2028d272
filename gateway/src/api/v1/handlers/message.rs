/*
 * Responsibility
 * - 認証済みリクエストを downstream (chat) へ proxy する handler
 * - downstream の status/body は verbatim で返す (再解釈しない)
 */
use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{HeaderMap, header},
    response::Response,
};

use crate::api::v1::extractors::AuthCtxExtractor;
use crate::error::AppError;
use crate::state::AppState;

pub async fn forward_message(
    State(state): State<AppState>,
    AuthCtxExtractor(ctx): AuthCtxExtractor,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    // The auth middleware only lets requests with this header through, but
    // the handler must not rely on middleware wiring for its own soundness.
    let authorization = headers
        .get(header::AUTHORIZATION)
        .cloned()
        .ok_or(AppError::MissingToken)?;
    let content_type = headers.get(header::CONTENT_TYPE).cloned();
    let body = (!body.is_empty()).then_some(body);

    let downstream = match state
        .forwarder
        .forward(&ctx.user, authorization, content_type, body)
        .await
    {
        Ok(downstream) => downstream,
        Err(err) => {
            tracing::error!(error = %err, "forwarding to chat service failed");
            return Err(err.into());
        }
    };

    let mut response = Response::builder().status(downstream.status);
    if let Some(content_type) = downstream.content_type {
        response = response.header(header::CONTENT_TYPE, content_type);
    }

    response
        .body(Body::from(downstream.body))
        .map_err(|_| AppError::Internal)
}
