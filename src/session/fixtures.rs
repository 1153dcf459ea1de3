//! Test fixtures for session tests
//!
//! Import via `use crate::session::fixtures::*` in test modules.

#![allow(dead_code)]

use base64::{Engine as _, engine::general_purpose};

use crate::client::TokenResponse;

/// Build an unsigned compact token whose payload is `claims`
pub fn token_with_claims(claims: serde_json::Value) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = general_purpose::URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

/// Token for a user with the given name, id and role
pub fn user_token(username: &str, uuid: &str, role: &str) -> String {
    token_with_claims(serde_json::json!({
        "username": username,
        "uuid": uuid,
        "role": role,
    }))
}

/// Token response as the authorization server would send it
pub fn token_response(access_token: impl Into<String>, expires_in: i64) -> TokenResponse {
    TokenResponse {
        access_token: access_token.into(),
        expires_in,
        token_type: Some("bearer".to_string()),
        refresh_token: None,
        scope: Some("read".to_string()),
    }
}
