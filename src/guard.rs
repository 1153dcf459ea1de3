//! Route guard for protected views
//!
//! Every navigation attempt is checked against the current session. When
//! there is no valid session the guard sends the navigator to the login
//! route with the requested path attached as `returnUrl`, and denies.

use crate::error::Result;
use crate::session::Authenticator;

/// Outcome of a single navigation attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny,
}

/// Navigation to a named route carrying the path to come back to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub route: String,
    pub return_url: String,
}

impl Redirect {
    /// Render as `/<route>?returnUrl=<percent-encoded path>`
    pub fn to_url(&self) -> String {
        format!(
            "/{}?returnUrl={}",
            self.route.trim_start_matches('/'),
            urlencoding::encode(&self.return_url)
        )
    }
}

/// Router capability the guard redirects through
pub trait Navigator {
    fn navigate(&self, redirect: &Redirect);
}

/// Blocks navigation to protected routes when no valid session exists
pub struct RouteGuard<A: Authenticator, N: Navigator> {
    auth: A,
    navigator: N,
    login_route: String,
}

impl<A: Authenticator, N: Navigator> RouteGuard<A, N> {
    pub fn new(auth: A, navigator: N, login_route: impl Into<String>) -> Self {
        Self {
            auth,
            navigator,
            login_route: login_route.into(),
        }
    }

    /// Decide whether navigation to `requested_path` may proceed
    pub fn can_activate(&self, requested_path: &str) -> Result<GuardDecision> {
        if self.auth.is_authenticated()? {
            log::debug!("Guard allowed {}", requested_path);
            return Ok(GuardDecision::Allow);
        }

        let redirect = Redirect {
            route: self.login_route.clone(),
            return_url: requested_path.to_string(),
        };
        log::debug!("Guard denied {}, redirecting to {}", requested_path, redirect.to_url());
        self.navigator.navigate(&redirect);

        Ok(GuardDecision::Deny)
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }
}
