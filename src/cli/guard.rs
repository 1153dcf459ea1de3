//! Guard command: evaluate the route guard for one path

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::error::Result;
use crate::guard::{GuardDecision, Navigator, Redirect, RouteGuard};

/// Navigator that reports the redirect on stdout
struct StdoutNavigator;

impl Navigator for StdoutNavigator {
    fn navigate(&self, redirect: &Redirect) {
        println!("redirect {}", redirect.to_url());
    }
}

/// Run the guard for `path`, printing `allow` or `deny`
pub fn run(opts: &GlobalOptions, path: &str) -> Result<GuardDecision> {
    let ctx = CommandContext::new(opts)?;
    let guard = RouteGuard::new(&ctx.session, StdoutNavigator, ctx.config.login_route.clone());

    let decision = guard.can_activate(path)?;
    match decision {
        GuardDecision::Allow => println!("allow"),
        GuardDecision::Deny => println!("deny"),
    }

    Ok(decision)
}
