//! Mock authorization server client for testing
//!
//! Provides a mock implementation of [`AuthApi`] for unit testing
//! without making real HTTP calls.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::api::AuthApi;
use super::models::{Credentials, SocialProfile, TokenResponse};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockAuthClient::new().with_token(token_response("a.b.c", 3600)).await;
/// let token = mock.request_token(&Credentials::password("u", "p")).await?;
/// ```
#[derive(Default)]
pub struct MockAuthClient {
    /// Token to return from both endpoints
    token: Arc<Mutex<Option<TokenResponse>>>,
    /// Error to return (if any) - consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Usernames seen, in call order
    captured_usernames: Arc<Mutex<Vec<String>>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub request_token: usize,
    pub social_login: usize,
}

impl MockAuthClient {
    /// Create a new mock client with no configured token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the token returned from both endpoints.
    pub async fn with_token(self, token: TokenResponse) -> Self {
        *self.token.lock().await = Some(token);
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Usernames passed to either endpoint, in call order.
    pub async fn captured_usernames(&self) -> Vec<String> {
        self.captured_usernames.lock().await.clone()
    }

    async fn respond(&self, username: &str) -> Result<TokenResponse> {
        self.captured_usernames
            .lock()
            .await
            .push(username.to_string());

        if let Some(e) = self.error.lock().await.take() {
            return Err(e.into());
        }

        self.token
            .lock()
            .await
            .clone()
            .ok_or_else(|| ApiError::InvalidResponse("No mock token configured".to_string()).into())
    }
}

#[async_trait]
impl AuthApi for MockAuthClient {
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
        self.call_count.lock().await.request_token += 1;
        self.respond(&credentials.username).await
    }

    async fn social_login(&self, profile: &SocialProfile) -> Result<TokenResponse> {
        self.call_count.lock().await.social_login += 1;
        self.respond(&profile.username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::session::fixtures::token_response;

    #[tokio::test]
    async fn test_error_is_consumed_once() {
        let mock = MockAuthClient::new()
            .with_token(token_response("a.b.c", 60))
            .await
            .with_error(ApiError::Unauthorized)
            .await;
        let creds = Credentials::password("parrot", "pw");

        let first = mock.request_token(&creds).await;
        assert!(matches!(first, Err(Error::Api(ApiError::Unauthorized))));

        let second = mock.request_token(&creds).await.unwrap();
        assert_eq!(second.access_token, "a.b.c");
        assert_eq!(mock.call_counts().await.request_token, 2);
    }
}
