//! Login and social login commands

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::client::{Credentials, SocialProfile, TokenResponse};
use crate::error::Result;

/// Run the login command, prompting for whatever was not passed as a flag
pub async fn run(
    opts: &GlobalOptions,
    username: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let username = match username {
        Some(u) => u,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Username")
            .interact_text()?,
    };
    let password = match password {
        Some(p) => p,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    log::debug!("Logging in as {} via {}", username, ctx.config.token_url);
    let response = ctx
        .session
        .login(&Credentials::password(username, password))
        .await?;

    finish(&ctx, &response)
}

/// Run the social-login command
pub async fn social(opts: &GlobalOptions, profile: SocialProfile) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    log::debug!(
        "Social login as {} via {}",
        profile.username,
        ctx.config.social_url
    );
    let response = ctx.session.social_login(&profile).await?;

    finish(&ctx, &response)
}

/// Store the session and report who is now logged in
fn finish(ctx: &CommandContext, response: &TokenResponse) -> Result<()> {
    ctx.session.set_session(response)?;

    // The session is stored even when the payload cannot be decoded
    match ctx.session.username() {
        Ok(name) => println!("{} Logged in as {}", "✓".green(), name.bold()),
        Err(e) => {
            log::warn!("Stored token has unreadable claims: {}", e);
            println!("{} Logged in", "✓".green());
        }
    }
    println!("  Session valid for {}s", response.expires_in);

    Ok(())
}
