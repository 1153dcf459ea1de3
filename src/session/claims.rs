//! Identity claims carried in the access token payload
//!
//! Tokens are decoded, not verified: the signature segment is ignored.

use base64::{Engine as _, engine::general_purpose};
use serde::{Deserialize, Serialize};

use crate::error::TokenError;

/// Role granted to administrators
pub const ADMIN_ROLE: &str = "ROLE_ADMIN";

/// Identity attributes embedded in the token payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub uuid: String,

    #[serde(default)]
    pub role: String,
}

impl Claims {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// Decode the claims of a compact `header.payload.signature` token
pub fn decode(token: &str) -> Result<Claims, TokenError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(TokenError::Malformed(parts.len()));
    }

    let payload_bytes = base64_decode_url(parts[1]).map_err(TokenError::Base64)?;

    serde_json::from_slice(&payload_bytes).map_err(|e| TokenError::Json(e.to_string()))
}

/// Decode base64url, accepting input with or without padding. Payloads in
/// the standard alphabet (`+`, `/`) are accepted too.
fn base64_decode_url(input: &str) -> Result<Vec<u8>, String> {
    let normalized: String = input
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();

    general_purpose::URL_SAFE_NO_PAD
        .decode(normalized)
        .map_err(|e| e.to_string())
}
