//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] implementation used on the **web
//! platform**. It forwards every call to `window.localStorage` through `web-sys`.
//!
//! ## Error handling
//!
//! Storage can be missing (privacy modes, sandboxed iframes) or full. All
//! methods log and swallow those errors: reads return `None`, writes do
//! nothing. A broken storage degrades to "signed out" rather than crashing the
//! page.

use crate::session::KeyValueStore;
use web_sys::Storage;

/// `localStorage`-backed KeyValueStore for the web platform.
///
/// Zero-size and `Clone`; the storage handle is looked up on every call since
/// `web_sys::Storage` is not `Send` and cheap to fetch.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::error!("Failed to write {} to localStorage: {:?}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::error!("Failed to remove {} from localStorage: {:?}", key, e);
        }
    }
}
