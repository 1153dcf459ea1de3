//! Authorization server client implementation

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose};
use reqwest::{Client as HttpClient, Response, StatusCode};

use super::api::AuthApi;
use super::models::{Credentials, SocialProfile, TokenResponse};
use crate::config::Config;
use crate::error::{ApiError, Result};

/// Per-request timeout for calls to the authorization server
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the token and social login endpoints
pub struct HttpAuthClient {
    http: HttpClient,
    token_url: String,
    social_url: String,
    basic_auth: String,
}

impl HttpAuthClient {
    /// Create a client for the endpoints and client credentials in `config`
    pub fn new(config: &Config) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            token_url: config.token_url.clone(),
            social_url: config.social_url.clone(),
            basic_auth: basic_auth_header(&config.client_id, &config.client_secret),
        })
    }

    /// Map the response status and parse a token out of a success body
    async fn token_from(response: Response) -> Result<TokenResponse> {
        let status = response.status();
        match status {
            status if status.is_success() => {
                let body = response.text().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to read response: {}", e))
                })?;

                let token: TokenResponse = serde_json::from_str(&body).map_err(|e| {
                    ApiError::InvalidResponse(format!(
                        "Failed to parse token response: {}. Body was: {}",
                        e, body
                    ))
                })?;
                Ok(token)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

/// `Authorization` header value for OAuth client credentials
fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let raw = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", general_purpose::STANDARD.encode(raw))
}

#[async_trait]
impl AuthApi for HttpAuthClient {
    async fn request_token(&self, credentials: &Credentials) -> Result<TokenResponse> {
        log::debug!(
            "Requesting token for {} from {}",
            credentials.username,
            self.token_url
        );

        let response = self
            .http
            .post(&self.token_url)
            .header("Authorization", &self.basic_auth)
            .form(credentials)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::token_from(response).await
    }

    async fn social_login(&self, profile: &SocialProfile) -> Result<TokenResponse> {
        log::debug!(
            "Social login for {} at {}",
            profile.username,
            self.social_url
        );

        let response = self
            .http
            .post(&self.social_url)
            .json(profile)
            .send()
            .await
            .map_err(ApiError::from)?;

        Self::token_from(response).await
    }
}
