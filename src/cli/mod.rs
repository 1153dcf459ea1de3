//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod guard;
pub mod init;
pub mod login;
pub mod session;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// parrot-auth - Session helper and route guard for the poker platform
#[derive(Parser, Debug)]
#[command(name = "parrot-auth")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, json)
    #[arg(
        long,
        global = true,
        env = "PARROT_AUTH_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "PARROT_AUTH_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override session store location
    #[arg(long, global = true, env = "PARROT_AUTH_STORE", hide_env = true)]
    pub store: Option<PathBuf>,

    /// Override the authorization server host
    #[arg(long, global = true, env = "PARROT_AUTH_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "PARROT_AUTH_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a config file with the default settings
    Init,

    /// Log in with username and password
    Login {
        #[arg(long, short = 'u')]
        username: Option<String>,

        /// Prompted for when omitted
        #[arg(long, short = 'p', env = "PARROT_AUTH_PASSWORD", hide_env = true)]
        password: Option<String>,
    },

    /// Log in with a social identity profile
    SocialLogin {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long, default_value = "")]
        firstname: String,

        #[arg(long, default_value = "")]
        lastname: String,

        /// Account id at the identity provider
        #[arg(long)]
        social_id: Option<String>,

        /// Profile picture URL from the identity provider
        #[arg(long)]
        picture: Option<String>,
    },

    /// Remove the stored session
    Logout,

    /// Show whether a valid session exists
    Status,

    /// Show the identity in the stored token
    Whoami,

    /// Print the raw stored token
    Token,

    /// Check whether navigation to a protected path is allowed
    Guard {
        /// Requested path, e.g. /game/7
        path: String,
    },

    /// Display version information
    Version,
}
