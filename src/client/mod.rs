//! Authorization server client

pub mod api;
pub mod http;
#[cfg(test)]
pub mod mock;
pub mod models;

pub use api::AuthApi;
pub use http::HttpAuthClient;
#[cfg(test)]
pub use mock::MockAuthClient;
pub use models::{Credentials, SocialProfile, TokenResponse};
