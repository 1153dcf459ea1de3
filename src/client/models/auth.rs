//! Authentication models

use serde::{Deserialize, Serialize};

/// Password-grant login payload, sent as form fields
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub grant_type: String,
}

impl Credentials {
    /// Build a password-grant payload
    pub fn password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            grant_type: "password".to_string(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("grant_type", &self.grant_type)
            .finish()
    }
}

/// Token issued by the authorization server
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Compact JWT access token
    pub access_token: String,

    /// Lifetime in seconds from the moment of issue
    pub expires_in: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
