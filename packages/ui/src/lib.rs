//! This crate contains all shared UI for the workspace.
//!
//! Pure logic (validation, search, stats, view models, the route guard) lives
//! in plain modules with unit tests. Components and page views sit on top and
//! only lay that logic out.

pub mod components;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod validation;
pub mod search;
pub mod render;
pub mod guard;
pub use guard::{PageRole, NAV_LINKS};

mod timer;
mod browser;
mod visibility;

pub mod session;
pub use session::{SessionController, SessionError, SignedIn};

pub mod dashboard;
pub mod listing;
pub use listing::RecipeListing;

pub mod health;
pub use health::BackendStatus;

mod context;
pub use context::{load_config, use_app, AppContext, PlatformStore};

mod auth;
pub use auth::{use_auth, use_session, AuthProvider, AuthState, LogoutButton};

pub mod notification;
pub use notification::{notify, use_notifications, NoticeLevel, NotificationHost, Notifications};

mod animate;
pub use animate::{StatCounter, StatFormat};

#[cfg(test)]
mod testing;
