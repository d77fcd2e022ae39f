//! # Session storage on an abstract key-value store
//!
//! [`SessionStore`] persists the signed-in [`Session`] under two well-known keys,
//! `token` and `user`, through the [`KeyValueStore`] trait. The same logic runs
//! against browser `localStorage` ([`crate::LocalStore`]) and the in-memory
//! store used by tests and native builds ([`crate::MemoryStore`]).
//!
//! ## Pairing
//!
//! The token and user are written together by [`SessionStore::save`] and removed
//! together by [`SessionStore::clear`]. [`SessionStore::load`] only reports a
//! session when both keys are present and the user parses; anything else reads
//! as signed out.

use crate::models::{Session, UserInfo};

/// Storage key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-serialised [`UserInfo`].
pub const USER_KEY: &str = "user";

/// Synchronous string key-value storage, mirroring the browser Storage API.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Reads and writes the session pair on top of a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying key-value store.
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Load the persisted session, if a complete one exists.
    pub fn load(&self) -> Option<Session> {
        let token = self.store.get(TOKEN_KEY)?;
        let raw_user = self.store.get(USER_KEY)?;
        if token.is_empty() {
            return None;
        }
        match serde_json::from_str::<UserInfo>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                tracing::warn!("Discarding unreadable stored user: {}", e);
                None
            }
        }
    }

    /// Persist token and user together.
    pub fn save(&self, session: &Session) {
        let user = match serde_json::to_string(&session.user) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialise user: {}", e);
                return;
            }
        };
        self.store.set(USER_KEY, &user);
        self.store.set(TOKEN_KEY, &session.token);
    }

    /// Remove both halves of the session.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }
}
