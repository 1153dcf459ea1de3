//! Authorization server data models

mod auth;
mod user;

pub use auth::{Credentials, TokenResponse};
pub use user::SocialProfile;
