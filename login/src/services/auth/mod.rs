pub mod token_service;

use sha2::{Digest, Sha256};

/// Hex SHA-256 digest of a password. Demo-grade storage for the JSON file
/// store; no KDF.
pub fn password_digest(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digest_is_stable_and_input_sensitive() {
        assert_eq!(password_digest("secret"), password_digest("secret"));
        assert_ne!(password_digest("secret"), password_digest("Secret"));
    }
}
