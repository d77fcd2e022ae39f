//! Shared client services for all views.
//!
//! [`AppContext`] bundles the API client, session storage and configuration.
//! It is created once by [`crate::AuthProvider`] and read with [`use_app`].
//! Storage is platform-specific:
//! - **Web** (WASM + `web` feature): `localStorage` via [`store::LocalStore`]
//! - **Native / tests**: in-memory [`store::MemoryStore`]

use api::HttpApi;
use dioxus::prelude::*;
use store::{AppConfig, SessionStore};

use crate::session::SessionController;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Services every page controller is built from.
#[derive(Clone, Debug)]
pub struct AppContext {
    pub api: HttpApi,
    pub sessions: SessionStore<PlatformStore>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let api = HttpApi::new(config.api.base_url.clone());
        tracing::info!("using API at {}", api.base_url());
        Self {
            api,
            sessions: make_session_store(),
            config,
        }
    }

    /// Session controller over this context's API and storage.
    pub fn session_controller(&self) -> SessionController<HttpApi, PlatformStore> {
        SessionController::new(self.api.clone(), self.sessions.clone())
    }
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_uses_configured_base_url() {
        let mut config = AppConfig::default();
        config.api.base_url = "http://api.example.test/api/".to_string();
        let app = AppContext::new(config);
        assert_eq!(app.api.base_url(), "http://api.example.test/api");
    }
}

/// Create the platform session store.
pub fn make_session_store() -> SessionStore<PlatformStore> {
    SessionStore::new(PlatformStore::new())
}

/// Load the client config for this platform, defaulting when absent.
pub fn load_config() -> AppConfig {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        use store::KeyValueStore;
        match store::LocalStore::new().get(AppConfig::STORAGE_KEY) {
            Some(text) => AppConfig::from_toml_or_default(&text),
            None => AppConfig::default(),
        }
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        AppConfig::default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let Some(dir) = dirs::config_dir() else {
            return AppConfig::default();
        };
        let path = dir.join("recipebox").join(AppConfig::filename());
        match std::fs::read_to_string(&path) {
            Ok(text) => AppConfig::from_toml_or_default(&text),
            Err(_) => AppConfig::default(),
        }
    }
}
