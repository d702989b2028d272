use serde::{Deserialize, Serialize};

/// Request body for `/validate` (gateway-facing).
#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub username: String,
}
