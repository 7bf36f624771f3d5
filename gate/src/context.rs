//! Application context: the one owner of the flag store and session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client keeps a single `AppContext` in reactive state. Pages sign in
//! and out through it, and the route guard asks it about every navigation,
//! so nothing else reads or writes the flag store directly.
//!
//! TRADE-OFFS
//! ==========
//! The in-memory session is updated before the store on logout. A store that
//! refuses the removal still leaves this tab signed out; a reload would pick
//! the stale flag up again, which is acceptable for a flag that guards
//! nothing server-side.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use crate::config::{ConfigError, GateConfig};
use crate::guard::{Navigation, Navigator, Step};
use crate::routes::RouteTable;
use crate::session::{self, Identity, Session};
use crate::store::{FlagStore, StoreError};

#[derive(Debug)]
pub struct AppContext<S> {
    store: S,
    session: Session,
    routes: RouteTable,
    config: GateConfig,
}

impl<S: FlagStore> AppContext<S> {
    /// Build the standard route table for `config` and load the session.
    pub fn new(store: S, config: GateConfig) -> Result<Self, ConfigError> {
        let routes = RouteTable::standard(&config)?;
        Ok(Self::with_routes(store, config, routes))
    }

    #[must_use]
    pub fn with_routes(store: S, config: GateConfig, routes: RouteTable) -> Self {
        let session = Session::load(&store);
        Self { store, session, routes, config }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    #[must_use]
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-read the session, e.g. after another tab changed storage.
    pub fn reload(&mut self) {
        self.session = Session::load(&self.store);
    }

    /// Persist `identity` and mark the session authenticated.
    pub fn login(&mut self, identity: Identity) -> Result<(), StoreError> {
        if let Err(err) = session::persist(&mut self.store, &identity) {
            tracing::warn!(error = %err, "failed to persist session flags");
            self.session = Session::load(&self.store);
            return Err(err);
        }
        tracing::info!(username = identity.username.as_deref(), role = identity.role.as_deref(), "signed in");
        self.session = Session::Authenticated(identity);
        Ok(())
    }

    /// Clear every session flag.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        let previous = std::mem::take(&mut self.session);
        session::clear(&mut self.store).inspect_err(|err| {
            tracing::warn!(error = %err, "failed to clear session flags");
        })?;
        tracing::info!(username = previous.username(), "signed out");
        Ok(())
    }

    /// Run the guard for `path`, performing logout when `path` is the logout
    /// route.
    pub fn navigate(&mut self, path: &str) -> Result<Navigation, StoreError> {
        match Navigator::new(&self.routes, &self.config).decide(path, &self.session) {
            Step::Continue => Ok(Navigation::Continue),
            Step::Redirect(target) => Ok(Navigation::Redirect(target)),
            Step::Logout => {
                self.logout()?;
                Ok(Navigation::Redirect(self.config.login_path.clone()))
            }
        }
    }
}
