//! Token validation against the authentication authority.
//!
//! The gateway never decodes tokens itself. Each bearer token is sent to the
//! login service's validation endpoint and the decoded identity comes back in
//! the response body.
//!
//! Error taxonomy:
//! - the authority answered with a non-success status -> `Rejected`
//! - the transport failed or timed out -> `Unreachable`
//! - success status but an undecodable body -> `MalformedResponse`
//!
//! No retries here. Retry policy, if ever added, belongs to the HTTP client.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use axum::http::StatusCode;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication authority rejected the token (status {status})")]
    Rejected { status: StatusCode },

    #[error("authentication authority unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("authentication authority returned an undecodable body: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Identity decoded by the authority for a validated token.
///
/// Request-scoped: built per validated request and dropped when the response
/// is written. The gateway never stores it.
#[derive(Clone, Debug, Deserialize)]
pub struct IdentityClaims {
    #[serde(alias = "user")]
    pub username: String,
}

#[derive(Serialize)]
struct ValidationRequest<'a> {
    token: &'a str,
}

pub struct TokenValidator {
    client: reqwest::Client,
    validate_url: Url,
}

impl TokenValidator {
    /// `client` carries the outbound timeout; a timeout is reported the same
    /// way as any other transport failure.
    pub fn new(client: reqwest::Client, validate_url: Url) -> Self {
        Self {
            client,
            validate_url,
        }
    }

    /// `token` is the bearer token with the `Bearer ` scheme already stripped.
    pub async fn validate(&self, token: &str) -> Result<IdentityClaims, AuthError> {
        let response = self
            .client
            .post(self.validate_url.clone())
            .json(&ValidationRequest { token })
            .send()
            .await
            .map_err(AuthError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected { status });
        }

        let body = response.bytes().await.map_err(AuthError::Unreachable)?;
        serde_json::from_slice(&body).map_err(AuthError::MalformedResponse)
    }
}
