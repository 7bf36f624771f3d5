//! Route guard wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every path change runs through [`gate::AppContext::navigate`] exactly
//! once. The outlet uses [`visible_page`] to avoid rendering a protected page
//! for the instant before the redirect lands.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use gate::{AppContext, FlagStore, Navigator, Step};
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Run the guard for `path` and return where to redirect, if anywhere.
///
/// A store failure during logout still redirects to login: the in-memory
/// session is already anonymous at that point.
pub fn redirect_for<S: FlagStore>(state: &mut AppContext<S>, path: &str) -> Option<String> {
    match state.navigate(path) {
        Ok(navigation) => navigation.redirect_target().map(str::to_owned),
        Err(err) => {
            #[cfg(feature = "csr")]
            log::warn!("session flags not cleared: {err}");
            #[cfg(not(feature = "csr"))]
            let _ = err;
            Some(state.config().login_path.clone())
        }
    }
}

/// Route name to render for `path`, or `None` while a redirect is pending.
pub fn visible_page<S: FlagStore>(state: &AppContext<S>, path: &str) -> Option<&'static str> {
    let navigator = Navigator::new(state.routes(), state.config());
    match navigator.decide(path, state.session()) {
        Step::Continue => Some(state.routes().resolve(path).name),
        Step::Redirect(_) | Step::Logout => None,
    }
}

/// Re-run the guard whenever `pathname` changes.
pub fn install_route_guard<F>(session: RwSignal<SessionState>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        if let Some(target) = session.try_update(|state| redirect_for(state, &path)).flatten() {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
