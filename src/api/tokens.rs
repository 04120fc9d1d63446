use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;
use serde::Serialize;

use super::client::{ApiError, Client};
use crate::types::ApiToken;

#[derive(Serialize)]
struct NewToken<'a> {
    key: &'a str,
}

impl Client {
    pub fn list_tokens(&self) -> Result<Vec<ApiToken>, ApiError> {
        self.get_data("/tokens/")
    }

    /// Register `key` as a valid `X-API-Key` value.
    pub fn add_token(&self, key: &str) -> Result<String, ApiError> {
        self.post_ack("/tokens/", &NewToken { key })
    }

    pub fn delete_token(&self, id: u64) -> Result<String, ApiError> {
        self.delete_ack(&format!("/tokens/{id}"))
    }
}

/// Produce a fresh random key: 32 bytes of OS entropy, url-safe base64.
pub fn generate_key() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_url_safe_and_distinct() {
        let a = generate_key();
        let b = generate_key();
        assert_ne!(a, b);
        // 32 bytes -> 43 unpadded base64 chars.
        assert_eq!(a.len(), 43);
        assert!(a
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }
}
