//! Session state, identity claims and the authorization session

pub mod authorization;
pub mod claims;
#[cfg(test)]
pub mod fixtures;
pub mod storage;
pub mod store;

pub use authorization::{AuthorizationSession, Authenticator};
#[cfg(test)]
pub use storage::MemoryStorage;
pub use storage::SqliteStorage;
