//! Typed session state over the flag store.
//!
//! DESIGN
//! ======
//! The persisted form is four loose string keys. In memory the session is an
//! enum, so "not authenticated but still has a username" cannot be
//! represented. Loading treats anything other than `isAuthenticated == "true"`
//! as anonymous and ignores leftover identity keys.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::store::{FlagStore, KEY_AUTHENTICATED, KEY_LOGIN_TIME, KEY_ROLE, KEY_USERNAME, SESSION_KEYS, StoreError};

pub const AUTHENTICATED_VALUE: &str = "true";

/// Who is signed in. Every field is optional because the flag store is
/// client-editable and only `isAuthenticated` gates access.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub username: Option<String>,
    pub role: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub login_time: Option<i64>,
}

impl Identity {
    #[must_use]
    pub fn new(username: impl Into<String>, role: impl Into<String>, login_time: i64) -> Self {
        Self { username: Some(username.into()), role: Some(role.into()), login_time: Some(login_time) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated(Identity),
}

impl Session {
    /// Read the session from `store`.
    pub fn load<S: FlagStore + ?Sized>(store: &S) -> Self {
        if store.get(KEY_AUTHENTICATED).as_deref() != Some(AUTHENTICATED_VALUE) {
            return Self::Anonymous;
        }
        let login_time = store.get(KEY_LOGIN_TIME).and_then(|raw| raw.trim().parse::<i64>().ok());
        Self::Authenticated(Identity { username: store.get(KEY_USERNAME), role: store.get(KEY_ROLE), login_time })
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated(identity) => Some(identity),
        }
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.identity().and_then(|identity| identity.username.as_deref())
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.identity().and_then(|identity| identity.role.as_deref())
    }

    /// Flat projection matching the persisted keys.
    #[must_use]
    pub fn flags(&self) -> SessionFlags {
        match self {
            Self::Anonymous => SessionFlags::default(),
            Self::Authenticated(identity) => SessionFlags {
                authenticated: true,
                role: identity.role.clone(),
                username: identity.username.clone(),
                login_time: identity.login_time,
            },
        }
    }
}

/// Serializable view of the four session flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionFlags {
    pub authenticated: bool,
    pub role: Option<String>,
    pub username: Option<String>,
    pub login_time: Option<i64>,
}

impl From<SessionFlags> for Session {
    fn from(flags: SessionFlags) -> Self {
        if !flags.authenticated {
            return Self::Anonymous;
        }
        Self::Authenticated(Identity { username: flags.username, role: flags.role, login_time: flags.login_time })
    }
}

/// Replace whatever is in `store` with `identity`.
///
/// `isAuthenticated` is written last, so a write failing part-way leaves a
/// store that still loads as anonymous.
pub fn persist<S: FlagStore + ?Sized>(store: &mut S, identity: &Identity) -> Result<(), StoreError> {
    clear(store)?;
    if let Some(username) = &identity.username {
        store.set(KEY_USERNAME, username)?;
    }
    if let Some(role) = &identity.role {
        store.set(KEY_ROLE, role)?;
    }
    if let Some(login_time) = identity.login_time {
        store.set(KEY_LOGIN_TIME, &login_time.to_string())?;
    }
    store.set(KEY_AUTHENTICATED, AUTHENTICATED_VALUE)
}

/// Remove every session key, the authenticated flag first.
pub fn clear<S: FlagStore + ?Sized>(store: &mut S) -> Result<(), StoreError> {
    for key in SESSION_KEYS {
        store.remove(key)?;
    }
    Ok(())
}
