use serde::Deserialize;

/// Fields are optional so a missing one produces a field-specific 400
/// instead of a generic deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl SignupRequest {
    /// Returns `(username, email, password)` once all fields are present and
    /// non-empty.
    pub fn validate(&self) -> Result<(&str, &str, &str), &'static str> {
        let username = self
            .username
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("username is required")?;
        let email = self
            .email
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or("email is required")?;
        let password = self
            .password
            .as_deref()
            .filter(|s| !s.is_empty())
            .ok_or("password is required")?;

        Ok((username, email, password))
    }
}
