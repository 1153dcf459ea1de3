//! Error types for parrot-auth

use thiserror::Error;

/// Result type alias for parrot-auth operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("No session stored. Run `parrot-auth login` first.")]
    NoSession,

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Errors returned by the authorization server or the transport
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check your username and password.")]
    Unauthorized,

    #[error("Access denied by the authorization server.")]
    Forbidden,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to authorization server".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Failures decoding the claims out of a compact JWT
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Malformed token: expected 3 segments, found {0}")]
    Malformed(usize),

    #[error("Failed to decode token payload: {0}")]
    Base64(String),

    #[error("Failed to parse token payload: {0}")]
    Json(String),
}

/// Session storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Session store I/O error: {0}")]
    Io(String),

    #[error("Session store database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
