//! Persisted session state (token and expiry)

use chrono::{DateTime, Utc};

use super::storage::KeyValueStorage;
use crate::error::StoreError;

/// Storage key of the raw access token
pub const TOKEN_KEY: &str = "jwt_token";

/// Storage key of the expiry, a JSON integer of epoch milliseconds
pub const EXPIRES_AT_KEY: &str = "expires_at";

type Result<T> = std::result::Result<T, StoreError>;

/// A stored login: the access token and the instant it stops being valid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Valid strictly before `expires_at`
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

/// Reads and writes the single session of a storage scope
pub struct SessionStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Persist a session, overwriting any previous one
    pub fn save(&self, token: &str, expires_at: DateTime<Utc>) -> Result<()> {
        let millis = serde_json::to_string(&expires_at.timestamp_millis())
            .map_err(|e| StoreError::Io(e.to_string()))?;

        self.storage.set_item(TOKEN_KEY, token)?;
        self.storage.set_item(EXPIRES_AT_KEY, &millis)?;

        log::debug!("Session saved, expires at {}", expires_at.to_rfc3339());
        Ok(())
    }

    /// The stored session, `None` if either entry is missing or the expiry
    /// cannot be parsed
    pub fn read(&self) -> Result<Option<Session>> {
        let Some(token) = self.storage.get_item(TOKEN_KEY)? else {
            return Ok(None);
        };
        let Some(raw_expiry) = self.storage.get_item(EXPIRES_AT_KEY)? else {
            return Ok(None);
        };

        match parse_expiry(&raw_expiry) {
            Some(expires_at) => Ok(Some(Session { token, expires_at })),
            None => {
                log::warn!("Ignoring unparsable {} entry: {}", EXPIRES_AT_KEY, raw_expiry);
                Ok(None)
            }
        }
    }

    /// The raw stored token, regardless of the expiry entry. An empty entry
    /// counts as no token.
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self
            .storage
            .get_item(TOKEN_KEY)?
            .filter(|token| !token.is_empty()))
    }

    /// Remove both entries; clearing an empty store is a no-op
    pub fn clear(&self) -> Result<()> {
        self.storage.remove_item(TOKEN_KEY)?;
        self.storage.remove_item(EXPIRES_AT_KEY)?;
        log::debug!("Session cleared");
        Ok(())
    }
}

fn parse_expiry(raw: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = serde_json::from_str(raw).ok()?;
    DateTime::from_timestamp_millis(millis)
}
