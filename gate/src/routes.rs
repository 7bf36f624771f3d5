//! Static route table.
//!
//! DESIGN
//! ======
//! Paths match case-insensitively and ignore the query string, fragment and
//! a trailing slash, the same way the browser router matches them. Anything
//! that matches no descriptor resolves to the table's catch-all.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::collections::HashSet;

use crate::config::{ConfigError, GateConfig};

pub const TRANSACTIONS_PATH: &str = "/transactions";
pub const INPUT_FORM_PATH: &str = "/inputform";
pub const REMARKS_PATH: &str = "/remarks";
pub const CALENDAR_PATH: &str = "/calendar";
pub const LOGOUT_PATH: &str = "/logout";
pub const HOME_PATH: &str = "/";
pub const CATCH_ALL_PATH: &str = "*";

/// Access requirements attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_guest: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false, requires_guest: false };
    pub const AUTH: Self = Self { requires_auth: true, requires_guest: false };
    pub const GUEST: Self = Self { requires_auth: false, requires_guest: true };
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RouteKind {
    /// Renders a page.
    View,
    /// Clears the session, then sends the visitor to login.
    Logout,
    /// Alias that forwards to another path once the guard allows it.
    Redirect(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: &'static str,
    pub meta: RouteMeta,
    pub kind: RouteKind,
}

impl RouteDescriptor {
    #[must_use]
    pub fn view(path: impl Into<String>, name: &'static str, meta: RouteMeta) -> Self {
        Self { path: path.into(), name, meta, kind: RouteKind::View }
    }

    #[must_use]
    pub fn logout(path: impl Into<String>) -> Self {
        Self { path: path.into(), name: "Logout", meta: RouteMeta::PUBLIC, kind: RouteKind::Logout }
    }

    #[must_use]
    pub fn redirect(path: impl Into<String>, name: &'static str, meta: RouteMeta, target: impl Into<String>) -> Self {
        Self { path: path.into(), name, meta, kind: RouteKind::Redirect(target.into()) }
    }

    fn matches(&self, normalized: &str) -> bool {
        normalize_path(&self.path).eq_ignore_ascii_case(normalized)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
    fallback: RouteDescriptor,
}

impl RouteTable {
    /// Build a table and check it against `config`.
    ///
    /// The login path must be a guest-only view and the landing path an
    /// authenticated view, so that every redirect the guard issues lands on a
    /// page the redirected session is allowed to see.
    pub fn new(
        routes: Vec<RouteDescriptor>,
        fallback: RouteDescriptor,
        config: &GateConfig,
    ) -> Result<Self, ConfigError> {
        let mut seen = HashSet::new();
        for route in routes.iter().chain(std::iter::once(&fallback)) {
            if route.meta.requires_auth && route.meta.requires_guest {
                return Err(ConfigError::ConflictingMeta(route.path.clone()));
            }
            if !seen.insert(normalize_path(&route.path).to_ascii_lowercase()) {
                return Err(ConfigError::DuplicatePath(route.path.clone()));
            }
        }

        let table = Self { routes, fallback };
        let login = table.find(&config.login_path);
        if !login.is_some_and(|route| route.kind == RouteKind::View && route.meta == RouteMeta::GUEST) {
            return Err(ConfigError::LoginNotGuestOnly(config.login_path.clone()));
        }
        let landing = table.find(&config.landing_path);
        if !landing.is_some_and(|route| route.kind == RouteKind::View && route.meta == RouteMeta::AUTH) {
            return Err(ConfigError::LandingNotProtected(config.landing_path.clone()));
        }
        Ok(table)
    }

    /// The application's route table.
    pub fn standard(config: &GateConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let routes = vec![
            RouteDescriptor::view(config.login_path.clone(), "Login", RouteMeta::GUEST),
            RouteDescriptor::view(TRANSACTIONS_PATH, "Transactions", RouteMeta::AUTH),
            RouteDescriptor::view(INPUT_FORM_PATH, "InputForm", RouteMeta::AUTH),
            RouteDescriptor::view(REMARKS_PATH, "Remarks", RouteMeta::AUTH),
            RouteDescriptor::view(CALENDAR_PATH, "Calendar", RouteMeta::AUTH),
            RouteDescriptor::logout(LOGOUT_PATH),
            RouteDescriptor::redirect(HOME_PATH, "Home", RouteMeta::AUTH, config.landing_path.clone()),
        ];
        let fallback =
            RouteDescriptor::redirect(CATCH_ALL_PATH, "NotFound", RouteMeta::AUTH, config.landing_path.clone());
        Self::new(routes, fallback, config)
    }

    /// Descriptor for `path`, or the catch-all.
    #[must_use]
    pub fn resolve(&self, path: &str) -> &RouteDescriptor {
        self.find(path).unwrap_or(&self.fallback)
    }

    /// Descriptor for `path` without falling back.
    #[must_use]
    pub fn find(&self, path: &str) -> Option<&RouteDescriptor> {
        let normalized = normalize_path(path);
        self.routes.iter().find(|route| route.matches(normalized))
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteDescriptor> {
        self.routes.iter().chain(std::iter::once(&self.fallback)).find(|route| route.name == name)
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    #[must_use]
    pub fn fallback(&self) -> &RouteDescriptor {
        &self.fallback
    }
}

/// Strip query, fragment and trailing slash. An empty result is `/`.
#[must_use]
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() { HOME_PATH } else { trimmed }
}
