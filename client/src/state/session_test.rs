use gate::{Identity, MemoryStore};

use super::*;

fn lookup(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

// =============================================================================
// load_state
// =============================================================================

#[test]
fn load_state_uses_looked_up_config() {
    let state = load_state(MemoryStore::new(), lookup(&[("FORMDESK_LANDING_PATH", "/inputform")])).expect("state");
    assert_eq!(state.config().landing_path, "/inputform");
}

#[test]
fn load_state_falls_back_to_defaults_on_bad_config() {
    let state = load_state(MemoryStore::new(), lookup(&[("FORMDESK_LANDING_PATH", "/nowhere")])).expect("state");
    assert_eq!(state.config(), &GateConfig::default());
}

#[test]
fn build_lookup_ignores_unknown_keys() {
    assert_eq!(build_lookup("PATH"), None);
}

// =============================================================================
// display_name
// =============================================================================

#[test]
fn display_name_is_none_when_anonymous() {
    let state = load_state(MemoryStore::new(), |_| None).expect("state");
    assert_eq!(display_name(&state), None);
}

#[test]
fn display_name_includes_role() {
    let mut state = load_state(MemoryStore::new(), |_| None).expect("state");
    state.login(Identity::new("alice", DEFAULT_ROLE, 1)).expect("login");
    assert_eq!(display_name(&state).as_deref(), Some("alice (user)"));
}

#[test]
fn display_name_without_username_uses_placeholder() {
    let mut state = load_state(MemoryStore::new(), |_| None).expect("state");
    state.login(Identity::default()).expect("login");
    assert_eq!(display_name(&state).as_deref(), Some("signed in"));
}
