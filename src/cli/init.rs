//! Init command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::config::Config;
use crate::error::Result;

/// Write a config file holding the defaults plus any host/store overrides.
/// An existing file is left untouched.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;

    if path.exists() {
        println!(
            "{} Config already exists at {}",
            "○".dimmed(),
            path.display().to_string().cyan()
        );
        return Ok(());
    }

    let mut config = Config::default();
    if let Some(ref host) = opts.api_host {
        config = config.with_api_host(host);
    }
    if let Some(ref store) = opts.store {
        config.store_path = Some(store.clone());
    }

    config.save_to(&path)?;

    println!(
        "{} Wrote {}",
        "✓".green(),
        path.display().to_string().cyan()
    );
    println!("  Token endpoint: {}", config.token_url);

    Ok(())
}
