//! Navigation guard.
//!
//! ARCHITECTURE
//! ============
//! [`check`] is the whole access policy: two conditionals over the target's
//! meta and the session. [`Navigator`] resolves a path in the route table and
//! turns the policy result into a [`Step`] without touching storage; the
//! logout side effect is left to [`crate::context::AppContext::navigate`].

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::GateConfig;
use crate::routes::{RouteKind, RouteMeta, RouteTable};
use crate::session::Session;

/// Result of applying the access policy to one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectToLogin,
    RedirectToLanding,
}

impl Decision {
    /// Redirect path for this decision, `None` for [`Decision::Allow`].
    #[must_use]
    pub fn target(self, config: &GateConfig) -> Option<&str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(&config.login_path),
            Self::RedirectToLanding => Some(&config.landing_path),
        }
    }
}

/// Decide whether `session` may enter a route with `meta`.
#[must_use]
pub fn check(meta: RouteMeta, session: &Session) -> Decision {
    let authenticated = session.is_authenticated();
    if meta.requires_auth && !authenticated {
        Decision::RedirectToLogin
    } else if meta.requires_guest && authenticated {
        Decision::RedirectToLanding
    } else {
        Decision::Allow
    }
}

/// What the navigator wants done with a requested path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Redirect(String),
    /// The path is the logout pseudo-route; the caller clears the session.
    Logout,
}

/// What the router should do after the session side effects have run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Continue,
    Redirect(String),
}

impl Navigation {
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Continue => None,
            Self::Redirect(target) => Some(target),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Navigator<'a> {
    routes: &'a RouteTable,
    config: &'a GateConfig,
}

impl<'a> Navigator<'a> {
    #[must_use]
    pub fn new(routes: &'a RouteTable, config: &'a GateConfig) -> Self {
        Self { routes, config }
    }

    /// Resolve `path` and apply the guard for `session`.
    #[must_use]
    pub fn decide(&self, path: &str, session: &Session) -> Step {
        let route = self.routes.resolve(path);
        if route.kind == RouteKind::Logout {
            tracing::debug!(path, "logout route requested");
            return Step::Logout;
        }

        let decision = check(route.meta, session);
        tracing::debug!(
            path,
            route = route.name,
            authenticated = session.is_authenticated(),
            ?decision,
            "navigation checked"
        );
        if let Some(target) = decision.target(self.config) {
            return Step::Redirect(target.to_owned());
        }
        match &route.kind {
            RouteKind::Redirect(target) => Step::Redirect(target.clone()),
            RouteKind::View | RouteKind::Logout => Step::Continue,
        }
    }
}
