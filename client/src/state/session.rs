//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<SessionState>`. The route guard, the
//! login page and the nav bar all go through this one context; nothing else
//! touches the flag store.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use gate::config::{LANDING_PATH_VAR, LOGIN_PATH_VAR};
use gate::{AppContext, ConfigError, FlagStore, GateConfig};

use crate::util::storage::BrowserStore;

pub type SessionState = AppContext<BrowserStore>;

/// Role written for users signing in through the login page.
pub const DEFAULT_ROLE: &str = "user";

/// Gate settings baked in at build time.
pub fn build_lookup(key: &str) -> Option<String> {
    match key {
        LANDING_PATH_VAR => option_env!("FORMDESK_LANDING_PATH"),
        LOGIN_PATH_VAR => option_env!("FORMDESK_LOGIN_PATH"),
        _ => None,
    }
    .map(str::to_owned)
}

/// Build the application context from `lookup`, falling back to the default
/// configuration when the looked-up one is rejected.
pub fn load_state<S, F>(store: S, lookup: F) -> Result<AppContext<S>, ConfigError>
where
    S: FlagStore + Clone,
    F: Fn(&str) -> Option<String>,
{
    GateConfig::from_lookup(lookup)
        .and_then(|config| AppContext::new(store.clone(), config))
        .or_else(|err| {
            #[cfg(feature = "csr")]
            log::warn!("gate config rejected, using defaults: {err}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
            AppContext::new(store, GateConfig::default())
        })
}

/// Display label for the signed-in user.
pub fn display_name<S: FlagStore>(state: &AppContext<S>) -> Option<String> {
    let session = state.session();
    if !session.is_authenticated() {
        return None;
    }
    let name = session.username().unwrap_or("signed in");
    Some(match session.role() {
        Some(role) => format!("{name} ({role})"),
        None => name.to_owned(),
    })
}
