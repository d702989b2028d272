//! Bearer token 検証 → AuthCtx を extensions に入れる
//!
//! Protected prefix に一致するリクエストを handler の前で gate する。
//! 検証そのものは login service 側 (TokenValidator 経由) で行い、
//! gateway は結果を HTTP status に写すだけ。

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::error::AppError;
use crate::state::AppState;

/// Apply the authentication gate to the whole router.
///
/// 例：
/// ```ignore
/// let app = build_routes(state.clone());
/// let app = middleware::auth::apply(app, state);
/// ```
pub fn apply(router: Router, state: AppState) -> Router {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に state を渡す
    router.layer(middleware::from_fn_with_state(state, access_middleware))
}

async fn access_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    // Unprotected paths pass through untouched. So do methods outside the
    // protected set: the router answers those with its own 405.
    if !state.protected.matches(req.uri().path(), req.method()) {
        return Ok(next.run(req).await);
    }

    let auth = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::MissingToken)?;

    let token = bearer_token(auth)?;

    let claims = match state.validator.validate(token).await {
        Ok(claims) => claims,
        Err(err) => {
            tracing::warn!(error = %err, "token validation failed");
            return Err(err.into());
        }
    };

    let auth_ctx = AuthCtx::new(claims.username);

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(auth_ctx);

    Ok(next.run(req).await)
}

/// Strict `Bearer <token>` shape: exactly the scheme plus a non-empty token.
/// Anything else is a malformed header, rejected rather than crashed on.
fn bearer_token(header: &str) -> Result<&str, AppError> {
    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AppError::MalformedAuthHeader)?;

    if token.is_empty() {
        return Err(AppError::MalformedAuthHeader);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_token_extracts_the_token() {
        assert_eq!(bearer_token("Bearer abc123").unwrap(), "abc123");
    }

    #[test]
    fn bearer_token_rejects_missing_scheme() {
        assert!(matches!(
            bearer_token("abc123"),
            Err(AppError::MalformedAuthHeader)
        ));
    }

    #[test]
    fn bearer_token_rejects_wrong_scheme() {
        assert!(matches!(
            bearer_token("Basic abc123"),
            Err(AppError::MalformedAuthHeader)
        ));
    }

    #[test]
    fn bearer_token_rejects_scheme_without_token() {
        // `Authorization: Bearer` and `Authorization: Bearer ` both lack a
        // token segment.
        assert!(matches!(
            bearer_token("Bearer"),
            Err(AppError::MalformedAuthHeader)
        ));
        assert!(matches!(
            bearer_token("Bearer "),
            Err(AppError::MalformedAuthHeader)
        ));
    }

    #[test]
    fn bearer_token_keeps_inner_whitespace() {
        // Only the first space separates scheme and token; the rest is the
        // token and the authority decides what to make of it.
        assert_eq!(bearer_token("Bearer a b").unwrap(), "a b");
    }
}
