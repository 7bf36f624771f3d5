//! Session flag store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build persists flags in `window.localStorage`; everything
//! above this module only sees the [`FlagStore`] trait, so the guard and the
//! application context run unchanged against [`MemoryStore`] in native tests.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;

/// `"true"` while a session is signed in; absent otherwise.
pub const KEY_AUTHENTICATED: &str = "isAuthenticated";
pub const KEY_ROLE: &str = "userRole";
pub const KEY_USERNAME: &str = "username";
/// Milliseconds since the Unix epoch, as a decimal string.
pub const KEY_LOGIN_TIME: &str = "loginTime";

/// Every key owned by the session. Logout removes all of them.
pub const SESSION_KEYS: [&str; 4] = [KEY_AUTHENTICATED, KEY_ROLE, KEY_USERNAME, KEY_LOGIN_TIME];

/// Error returned by [`FlagStore`] writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No backing storage exists (no window, storage disabled, non-browser build).
    #[error("flag store is unavailable")]
    Unavailable,
    /// The backing storage refused the write (quota, privacy mode).
    #[error("flag store rejected write of {key:?}: {reason}")]
    Write { key: String, reason: String },
}

/// String-valued key/value storage for session flags.
pub trait FlagStore {
    /// Read `key`, or `None` when it is absent or storage cannot be read.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-process flag store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}
