//! Authentication API trait

use async_trait::async_trait;

use crate::client::models::{Credentials, SocialProfile, TokenResponse};
use crate::error::Result;

/// Token-issuing operations of the authorization server
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for an access token (password grant)
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse>;

    /// Exchange a social identity profile for an access token
    async fn social_login(&self, profile: &SocialProfile) -> Result<TokenResponse>;
}
