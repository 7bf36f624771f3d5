use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::store::{KEY_AUTHENTICATED, MemoryStore, SESSION_KEYS};

/// Store that reads from memory but refuses every write.
#[derive(Default)]
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl FlagStore for ReadOnlyStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Write { key: key.to_owned(), reason: "read-only".to_owned() })
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        Err(StoreError::Write { key: key.to_owned(), reason: "read-only".to_owned() })
    }
}

/// Store whose contents another handle can change, like a second browser tab.
struct SharedStore(Rc<RefCell<MemoryStore>>);

impl FlagStore for SharedStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.0.borrow_mut().remove(key)
    }
}

fn context() -> AppContext<MemoryStore> {
    AppContext::new(MemoryStore::new(), GateConfig::default()).expect("context")
}

fn alice() -> Identity {
    Identity::new("alice", "clerk", 1_700_000_000_000)
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn new_loads_existing_session_from_store() {
    let mut store = MemoryStore::new();
    session::persist(&mut store, &alice()).expect("persist");
    let ctx = AppContext::new(store, GateConfig::default()).expect("context");
    assert_eq!(ctx.session(), &Session::Authenticated(alice()));
}

#[test]
fn new_rejects_bad_config() {
    let config = GateConfig { landing_path: "/login".to_owned(), ..GateConfig::default() };
    assert!(AppContext::new(MemoryStore::new(), config).is_err());
}

// =============================================================================
// login / logout
// =============================================================================

#[test]
fn login_writes_store_and_session() {
    let mut ctx = context();
    ctx.login(alice()).expect("login");
    assert!(ctx.session().is_authenticated());
    assert_eq!(Session::load(ctx.store()), Session::Authenticated(alice()));
}

#[test]
fn login_failure_leaves_session_anonymous() {
    let mut ctx = AppContext::new(ReadOnlyStore::default(), GateConfig::default()).expect("context");
    let err = ctx.login(alice()).unwrap_err();
    assert!(matches!(err, StoreError::Write { .. }));
    assert_eq!(ctx.session(), &Session::Anonymous);
}

#[test]
fn logout_clears_all_four_keys() {
    let mut ctx = context();
    ctx.login(alice()).expect("login");
    ctx.logout().expect("logout");
    for key in SESSION_KEYS {
        assert!(!ctx.store().contains(key), "{key} should be cleared");
    }
    assert_eq!(ctx.session(), &Session::Anonymous);
}

#[test]
fn logout_failure_still_signs_out_in_memory() {
    let mut inner = MemoryStore::new();
    session::persist(&mut inner, &alice()).expect("persist");
    let mut ctx = AppContext::new(ReadOnlyStore { inner }, GateConfig::default()).expect("context");
    assert!(ctx.session().is_authenticated());
    assert!(ctx.logout().is_err());
    assert_eq!(ctx.session(), &Session::Anonymous);
}

#[test]
fn reload_picks_up_store_changes() {
    let shared = Rc::new(RefCell::new(MemoryStore::new()));
    let mut ctx = AppContext::new(SharedStore(Rc::clone(&shared)), GateConfig::default()).expect("context");
    ctx.login(alice()).expect("login");

    // Another tab signs out underneath us.
    shared.borrow_mut().remove(KEY_AUTHENTICATED).expect("remove");
    assert!(ctx.session().is_authenticated());
    ctx.reload();
    assert!(!ctx.session().is_authenticated());
}

// =============================================================================
// navigate
// =============================================================================

#[test]
fn navigate_logout_clears_session_and_redirects_to_login() {
    let mut ctx = context();
    ctx.login(alice()).expect("login");
    assert_eq!(ctx.navigate("/logout").expect("navigate"), Navigation::Redirect("/login".to_owned()));
    assert!(ctx.store().is_empty());
    assert_eq!(
        ctx.navigate("/transactions").expect("navigate"),
        Navigation::Redirect("/login".to_owned())
    );
}

#[test]
fn navigate_full_session_lifecycle() {
    let mut ctx = context();
    assert_eq!(ctx.navigate("/inputform").expect("navigate"), Navigation::Redirect("/login".to_owned()));
    assert_eq!(ctx.navigate("/login").expect("navigate"), Navigation::Continue);

    ctx.login(alice()).expect("login");
    assert_eq!(ctx.navigate("/login").expect("navigate"), Navigation::Redirect("/transactions".to_owned()));
    assert_eq!(ctx.navigate("/inputform").expect("navigate"), Navigation::Continue);
    assert_eq!(ctx.navigate("/").expect("navigate"), Navigation::Redirect("/transactions".to_owned()));
}

#[test]
fn navigate_logout_reports_store_failure() {
    let mut inner = MemoryStore::new();
    session::persist(&mut inner, &alice()).expect("persist");
    let mut ctx = AppContext::new(ReadOnlyStore { inner }, GateConfig::default()).expect("context");
    assert!(ctx.navigate("/logout").is_err());
    assert_eq!(
        ctx.navigate("/remarks").expect("navigate"),
        Navigation::Redirect("/login".to_owned())
    );
}
