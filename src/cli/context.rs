//! Command execution context
//!
//! Resolves configuration and opens the session store once, so every
//! command works against the same authorization session.

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::HttpAuthClient;
use crate::config::Config;
use crate::error::Result;
use crate::session::{AuthorizationSession, SqliteStorage};

/// Session type the CLI drives: HTTP transport, SQLite-backed storage
pub type CliSession = AuthorizationSession<HttpAuthClient, SqliteStorage>;

/// Context for command execution containing config, session and output options
pub struct CommandContext {
    pub config: Config,
    pub session: CliSession,
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load config, apply overrides and open the session store.
    ///
    /// # Errors
    /// Returns error if the config file is invalid or the store cannot be opened.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;

        if let Some(ref host) = opts.api_host {
            config = config.with_api_host(host);
        }
        if let Some(ref store) = opts.store {
            config.store_path = Some(store.clone());
        }

        let store_path = config.session_store_path()?;
        log::debug!("Using session store at {}", store_path.display());

        let storage = SqliteStorage::open(&store_path)?;
        let client = HttpAuthClient::new(&config)?;
        let session = AuthorizationSession::from_config(client, storage, &config);

        Ok(Self {
            config,
            session,
            format: opts.format,
        })
    }
}
