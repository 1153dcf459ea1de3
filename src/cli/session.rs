//! Logout and token commands

use colored::Colorize;

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::{Error, Result};

/// Run the logout command. Logging out without a session is fine.
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    ctx.session.logout()?;
    println!("{} Logged out", "✓".green());
    Ok(())
}

/// Print the raw stored token
pub fn token(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let token = ctx.session.token()?.ok_or(Error::NoSession)?;
    println!("{}", token);
    Ok(())
}
