use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Usually "Bearer"
    pub token_type: String,
    /// Seconds until expiry.
    pub expires_in: u64,
}
