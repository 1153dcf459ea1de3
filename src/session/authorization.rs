//! Login, logout and identity queries over the stored session

use chrono::{DateTime, Utc};

use super::claims::{self, Claims};
use super::storage::KeyValueStorage;
use super::store::{Session, SessionStore};
use crate::client::{AuthApi, Credentials, SocialProfile, TokenResponse};
use crate::config::Config;
use crate::error::Result;

/// Anything that can answer "is there a valid session right now?"
pub trait Authenticator {
    fn is_authenticated(&self) -> Result<bool>;
}

impl<T: Authenticator + ?Sized> Authenticator for &T {
    fn is_authenticated(&self) -> Result<bool> {
        (**self).is_authenticated()
    }
}

/// Public face of the session: talks to the authorization server through
/// `A` and keeps the resulting session in `S`.
pub struct AuthorizationSession<A: AuthApi, S: KeyValueStorage> {
    api: A,
    store: SessionStore<S>,
    fallback_username: String,
    fallback_user_id: String,
}

impl<A: AuthApi, S: KeyValueStorage> AuthorizationSession<A, S> {
    /// Create a session using the fallbacks from the default config
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(api: A, storage: S) -> Self {
        Self::from_config(api, storage, &Config::default())
    }

    /// Create a session using the fallbacks from `config`
    pub fn from_config(api: A, storage: S, config: &Config) -> Self {
        Self {
            api,
            store: SessionStore::new(storage),
            fallback_username: config.fallback_username.clone(),
            fallback_user_id: config.fallback_user_id.clone(),
        }
    }

    /// Exchange credentials for a token. The session is not stored; pass the
    /// response to [`set_session`](Self::set_session).
    pub async fn login(&self, credentials: &Credentials) -> Result<TokenResponse> {
        self.api.request_token(credentials).await
    }

    /// Exchange a social profile for a token. Not stored either.
    pub async fn social_login(&self, profile: &SocialProfile) -> Result<TokenResponse> {
        self.api.social_login(profile).await
    }

    /// Store the token, expiring `expires_in` seconds from now
    pub fn set_session(&self, response: &TokenResponse) -> Result<()> {
        self.set_session_at(response, Utc::now())
    }

    /// Store the token, expiring `expires_in` seconds after `now`
    pub fn set_session_at(&self, response: &TokenResponse, now: DateTime<Utc>) -> Result<()> {
        let expires_at = chrono::Duration::try_seconds(response.expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(if response.expires_in < 0 {
                DateTime::<Utc>::MIN_UTC
            } else {
                DateTime::<Utc>::MAX_UTC
            });
        self.store.save(&response.access_token, expires_at)?;
        Ok(())
    }

    pub fn logout(&self) -> Result<()> {
        self.store.clear()?;
        Ok(())
    }

    /// The stored session, if any, whether or not it has expired
    pub fn session(&self) -> Result<Option<Session>> {
        Ok(self.store.read()?)
    }

    /// True iff a session exists and `now` is before its expiry
    pub fn is_authenticated_at(&self, now: DateTime<Utc>) -> Result<bool> {
        Ok(self
            .store
            .read()?
            .is_some_and(|session| session.is_valid_at(now)))
    }

    /// Decoded claims of the stored token, `None` when no token is stored
    pub fn claims(&self) -> Result<Option<Claims>> {
        match self.store.token()? {
            Some(token) => Ok(Some(claims::decode(&token)?)),
            None => Ok(None),
        }
    }

    /// False without a token; a malformed token is an error
    pub fn is_admin(&self) -> Result<bool> {
        Ok(self.claims()?.is_some_and(|c| c.is_admin()))
    }

    /// Username claim, or the fallback display name when logged out
    pub fn username(&self) -> Result<String> {
        Ok(self
            .claims()?
            .map_or_else(|| self.fallback_username.clone(), |c| c.username))
    }

    /// User id claim, or the fallback id when logged out
    pub fn user_id(&self) -> Result<String> {
        Ok(self
            .claims()?
            .map_or_else(|| self.fallback_user_id.clone(), |c| c.uuid))
    }

    /// The raw stored token; an empty entry counts as none
    pub fn token(&self) -> Result<Option<String>> {
        Ok(self.store.token()?)
    }
}

impl<A: AuthApi, S: KeyValueStorage> Authenticator for AuthorizationSession<A, S> {
    fn is_authenticated(&self) -> Result<bool> {
        self.is_authenticated_at(Utc::now())
    }
}
