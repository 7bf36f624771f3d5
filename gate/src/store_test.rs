use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get(KEY_AUTHENTICATED), None);
}

#[test]
fn memory_store_set_then_get() {
    let mut store = MemoryStore::new();
    store.set(KEY_USERNAME, "alice").expect("set");
    assert_eq!(store.get(KEY_USERNAME).as_deref(), Some("alice"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_set_overwrites() {
    let mut store = MemoryStore::new();
    store.set(KEY_ROLE, "clerk").expect("set");
    store.set(KEY_ROLE, "admin").expect("set");
    assert_eq!(store.get(KEY_ROLE).as_deref(), Some("admin"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_absent_key_succeeds() {
    let mut store = MemoryStore::new();
    assert!(store.remove("missing").is_ok());
}

#[test]
fn memory_store_remove_deletes_key() {
    let mut store = MemoryStore::new();
    store.set(KEY_LOGIN_TIME, "1").expect("set");
    store.remove(KEY_LOGIN_TIME).expect("remove");
    assert!(!store.contains(KEY_LOGIN_TIME));
}

#[test]
fn session_keys_match_persisted_names() {
    assert_eq!(SESSION_KEYS, ["isAuthenticated", "userRole", "username", "loginTime"]);
}

#[test]
fn store_error_display() {
    let err = StoreError::Write { key: "username".to_owned(), reason: "quota exceeded".to_owned() };
    assert_eq!(err.to_string(), "flag store rejected write of \"username\": quota exceeded");
    assert_eq!(StoreError::Unavailable.to_string(), "flag store is unavailable");
}
