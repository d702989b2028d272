//! Proxying to the downstream chat service.
//!
//! Builds the outbound request from the original payload plus the derived
//! identity headers, and hands the downstream answer back untouched. The
//! gateway does not reinterpret downstream status codes.

use axum::body::Bytes;
use axum::http::{HeaderValue, StatusCode, header};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("downstream service unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),
}

/// Downstream status and body, passed through to the original caller
/// verbatim, whatever the status value.
#[derive(Debug)]
pub struct DownstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<HeaderValue>,
    pub body: Bytes,
}

pub struct DownstreamForwarder {
    client: reqwest::Client,
    forward_url: Url,
    forward_body: bool,
}

impl DownstreamForwarder {
    pub fn new(client: reqwest::Client, forward_url: Url, forward_body: bool) -> Self {
        Self {
            client,
            forward_url,
            forward_body,
        }
    }

    /// Forward one authenticated request.
    ///
    /// Outbound headers are exactly `Authorization` (the caller's header,
    /// verbatim) and `UserID` (the validated identity). When body forwarding
    /// is enabled the original body travels unmodified, together with its
    /// `Content-Type`.
    pub async fn forward(
        &self,
        user: &str,
        original_auth: HeaderValue,
        content_type: Option<HeaderValue>,
        body: Option<Bytes>,
    ) -> Result<DownstreamResponse, ForwardError> {
        let mut request = self
            .client
            .post(self.forward_url.clone())
            .header(header::AUTHORIZATION, original_auth)
            .header("UserID", user);

        if self.forward_body && let Some(body) = body {
            if let Some(content_type) = content_type {
                request = request.header(header::CONTENT_TYPE, content_type);
            }
            request = request.body(body);
        }

        let response = request.send().await.map_err(ForwardError::Unreachable)?;

        let status = response.status();
        let content_type = response.headers().get(header::CONTENT_TYPE).cloned();
        let body = response.bytes().await.map_err(ForwardError::Unreachable)?;

        Ok(DownstreamResponse {
            status,
            content_type,
            body,
        })
    }
}
