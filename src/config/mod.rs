//! Configuration management for parrot-auth

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Default authorization server host
pub const DEFAULT_API_HOST: &str = "https://poker-user-service.herokuapp.com";

/// Token endpoint path, relative to the API host
const TOKEN_PATH: &str = "/oauth/token";

/// Social login endpoint path, relative to the API host
const SOCIAL_PATH: &str = "/api/sociallogin";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Password-grant token endpoint
    pub token_url: String,

    /// Social login endpoint
    pub social_url: String,

    /// OAuth client id sent in the Basic authorization header
    pub client_id: String,

    /// OAuth client secret sent in the Basic authorization header
    pub client_secret: String,

    /// Route name the guard redirects to when no session exists
    pub login_route: String,

    /// Display name reported when no token is stored
    pub fallback_username: String,

    /// User id reported when no token is stored
    pub fallback_user_id: String,

    /// Session database location (defaults to ~/.parrot-auth/session.db)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            token_url: format!("{}{}", DEFAULT_API_HOST, TOKEN_PATH),
            social_url: format!("{}{}", DEFAULT_API_HOST, SOCIAL_PATH),
            client_id: "my-trusted-client".to_string(),
            client_secret: "secret".to_string(),
            login_route: "login".to_string(),
            fallback_username: "Party Parrot".to_string(),
            fallback_user_id: "1207".to_string(),
            store_path: None,
        }
    }
}

impl Config {
    /// Directory holding config and session state (~/.parrot-auth)
    pub fn home_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".parrot-auth"))
    }

    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::home_dir()?.join("config.yaml"))
    }

    /// Resolve an optional override into the config path to use
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional override path.
    ///
    /// A missing file is not an error: every field has a default.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(&Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The file carries the client secret
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Point both endpoints at a different host, keeping their paths
    pub fn with_api_host(mut self, host: &str) -> Self {
        let host = host.trim_end_matches('/');
        self.token_url = format!("{}{}", host, TOKEN_PATH);
        self.social_url = format!("{}{}", host, SOCIAL_PATH);
        self
    }

    /// Session database path, from config or the default location
    pub fn session_store_path(&self) -> Result<PathBuf> {
        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::home_dir()?.join("session.db")),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.token_url.is_empty() {
            return Err(ConfigError::Invalid("token_url must not be empty".to_string()).into());
        }
        if self.login_route.is_empty() {
            return Err(ConfigError::Invalid("login_route must not be empty".to_string()).into());
        }
        Ok(())
    }
}
