//! parrot-auth - Session helper and route guard for the poker platform

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod guard;
mod output;
mod session;

use cli::{Cli, Commands, GlobalOptions};
use client::SocialProfile;
use error::Result;
use guard::GuardDecision;

/// Exit code when the guard denies navigation
const EXIT_DENIED: i32 = 2;

#[tokio::main]
async fn main() {
    match run().await {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts)?,
        Commands::Login { username, password } => {
            cli::login::run(&opts, username, password).await?
        }
        Commands::SocialLogin {
            username,
            email,
            firstname,
            lastname,
            social_id,
            picture,
        } => {
            let profile = SocialProfile {
                username,
                email,
                firstname,
                lastname,
                social_id,
                profile_picture_social: picture,
            };
            cli::login::social(&opts, profile).await?
        }
        Commands::Logout => cli::session::logout(&opts)?,
        Commands::Status => cli::status::run(&opts)?,
        Commands::Whoami => cli::status::whoami(&opts)?,
        Commands::Token => cli::session::token(&opts)?,
        Commands::Guard { path } => {
            if cli::guard::run(&opts, &path)? == GuardDecision::Deny {
                return Ok(EXIT_DENIED);
            }
        }
        Commands::Version => println!("parrot-auth version {}", env!("CARGO_PKG_VERSION")),
    }

    Ok(0)
}
