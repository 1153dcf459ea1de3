//! Status and whoami commands

use chrono::Utc;
use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::{format_json, format_remaining};
use crate::session::Authenticator;

/// Session status for JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_at: Option<String>,
    store: String,
    token_url: String,
}

/// Identity for JSON output
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Identity {
    username: String,
    user_id: String,
    admin: bool,
}

/// Run the status command to display the session state
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let session = ctx.session.session()?;
    let authenticated = ctx.session.is_authenticated()?;
    let store_path = ctx.config.session_store_path()?;

    if ctx.format == OutputFormat::Json {
        let report = StatusReport {
            authenticated,
            expires_at: session.as_ref().map(|s| s.expires_at.to_rfc3339()),
            store: store_path.display().to_string(),
            token_url: ctx.config.token_url.clone(),
        };
        println!("{}", format_json(&report)?);
        return Ok(());
    }

    println!("{}\n", "Session Status".bold());
    println!("Session store: {}", store_path.display().to_string().cyan());
    println!("Token endpoint: {}", ctx.config.token_url.cyan());
    println!();

    match session {
        Some(s) if authenticated => {
            let remaining = s.expires_at.signed_duration_since(Utc::now());
            println!(
                "{} Authenticated (expires in {})",
                "✓".green(),
                format_remaining(remaining)
            );
        }
        Some(s) => {
            println!(
                "{} Session expired at {}",
                "⚠".yellow(),
                s.expires_at.to_rfc3339()
            );
            println!("  → Run 'parrot-auth login' to sign in again");
        }
        None => {
            println!("{} Not authenticated", "✗".red());
            println!("  → Run 'parrot-auth login' to sign in");
        }
    }

    Ok(())
}

/// Run the whoami command: decoded claims, or the fallbacks when logged out
pub fn whoami(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let identity = Identity {
        username: ctx.session.username()?,
        user_id: ctx.session.user_id()?,
        admin: ctx.session.is_admin()?,
    };

    match ctx.format {
        OutputFormat::Json => println!("{}", format_json(&identity)?),
        OutputFormat::Pretty => {
            println!("Username: {}", identity.username.bold());
            println!("User id:  {}", identity.user_id);
            println!("Admin:    {}", if identity.admin { "yes" } else { "no" });
        }
    }

    Ok(())
}
