//! API trait definitions
//!
//! The authorization server only exposes token issuing, so a single
//! [`AuthApi`] trait covers the whole remote surface.

mod auth;

pub use auth::AuthApi;
