//! Browser `localStorage` flag store.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session flags live in `window.localStorage` so a reload keeps the
//! user signed in. Builds without the `csr` feature (native tests, tooling)
//! have no storage: reads come back empty and writes report
//! [`StoreError::Unavailable`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use gate::{FlagStore, StoreError};

/// Flag store backed by `window.localStorage`. Holds no state itself; every
/// call goes to the browser, so changes made by other tabs are visible.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "csr")]
fn describe(err: &wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl FlagStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|err| StoreError::Write { key: key.to_owned(), reason: describe(&err) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
            Err(StoreError::Unavailable)
        }
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            let storage = local_storage().ok_or(StoreError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|err| StoreError::Write { key: key.to_owned(), reason: describe(&err) })
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            Err(StoreError::Unavailable)
        }
    }
}
