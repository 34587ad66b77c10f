//! # Browser `localStorage` backend
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! resolves `window.localStorage` through `web-sys` on every call instead of
//! caching the handle, which keeps the type zero-size and `Clone`.
//!
//! ## Error handling
//!
//! Storage can be missing (no window, privacy mode) or full (quota exceeded).
//! Reads degrade to `None` and writes are dropped with a `warn!`, which the
//! session layer treats as "nothing persisted".

use crate::storage::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write of {key}");
            return false;
        };
        match storage.set_item(key, value) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to write {key} to localStorage: {e:?}");
                false
            }
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {key} from localStorage: {e:?}");
        }
    }
}
