//! Browser `localStorage` binding for the session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only place the client touches `web-sys` storage. Outside the
//! browser (native tests, non-`csr` builds) every read is `None` and every
//! write is a no-op, which the store reports as an absent session.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{KeyValueStorage, SessionStore};

/// `localStorage` of the current window.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

/// Session store used by every page and fetch helper.
pub type AppSessionStore = SessionStore<BrowserStorage>;

/// Build the app-wide session store.
pub fn session_store() -> AppSessionStore {
    SessionStore::new(BrowserStorage)
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStorage for BrowserStorage {
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

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; cannot write {key}");
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            let Some(storage) = local_storage() else {
                log::warn!("localStorage unavailable; cannot remove {key}");
                return;
            };
            if storage.remove_item(key).is_err() {
                log::warn!("localStorage remove failed for {key}");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}
