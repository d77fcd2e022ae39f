//! Authentication context and hooks for the UI.

use dioxus::prelude::*;
use store::{Session, UserInfo};

use crate::context::{load_config, use_app, AppContext};
use crate::guard::PageRole;
use crate::health::{self, BackendStatus};
use crate::notification::{notify, notify_persistent, NoticeLevel, NotificationHost, Notifications};

const BACKEND_DOWN: &str =
    "Backend server is not reachable. Please start the API server and reload.";

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    /// Result of the startup health probe.
    pub backend: BackendStatus,
    /// Set right after sign-in: the guard leaves the current page alone for
    /// this many milliseconds so the confirmation can be read.
    pub redirect_hold_ms: Option<u64>,
}

impl AuthState {
    pub fn new(session: Option<Session>) -> Self {
        Self {
            session,
            backend: BackendStatus::Checking,
            redirect_hold_ms: None,
        }
    }

    pub fn signed_in(&self) -> bool {
        self.session.is_some()
    }

    /// Adopt a freshly stored session and hold guard redirects for `hold_ms`.
    pub fn sign_in(&mut self, session: Session, hold_ms: u64) {
        self.session = Some(session);
        self.redirect_hold_ms = Some(hold_ms);
    }

    pub fn sign_out(&mut self) {
        self.session = None;
        self.redirect_hold_ms = None;
    }

    pub fn release_hold(&mut self) {
        self.redirect_hold_ms = None;
    }

    /// Where the guard sends a visitor of `page`, given this state.
    pub fn redirect_for(&self, page: PageRole) -> Option<PageRole> {
        if self.redirect_hold_ms.is_some() {
            return None;
        }
        page.redirect(self.signed_in())
    }

    pub fn user(&self) -> Option<&UserInfo> {
        self.session.as_ref().map(|s| &s.user)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The current session alone.
///
/// Readers of this memo are not woken by unrelated state changes such as the
/// health probe finishing or a redirect hold being released.
pub fn use_session() -> Memo<Option<Session>> {
    let auth = use_auth();
    use_memo(move || auth().session)
}

/// Provider component that owns the client services and session state.
/// Wrap your app with this component; it also hosts the notification toast.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let app = use_context_provider(|| AppContext::new(load_config()));
    let mut auth_state = use_context_provider(|| {
        Signal::new(AuthState::new(app.sessions.load()))
    });
    let mut notifications = use_context_provider(|| Signal::new(Notifications::default()));

    // Advisory only: nothing waits on this.
    let probe_app = app.clone();
    use_future(move || {
        let app = probe_app.clone();
        async move {
            let status = health::probe(
                &app.api,
                app.config.health.retries,
                app.config.health.retry_delay(),
            )
            .await;
            auth_state.write().backend = status;
            match status {
                BackendStatus::Healthy => notifications.write().clear_error(),
                BackendStatus::Unreachable => {
                    notify_persistent(&mut notifications, NoticeLevel::Error, BACKEND_DOWN)
                }
                BackendStatus::Checking => {}
            }
        }
    });

    rsx! {
        {children}
        NotificationHost { hide_after_ms: app.config.ui.notification_ms }
    }
}

/// Button that clears the session and confirms it, then calls `on_logged_out`.
///
/// The caller owns any follow-up navigation; this button unmounts as soon as
/// the session is gone.
#[component]
pub fn LogoutButton(
    on_logged_out: EventHandler<()>,
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let app = use_app();
    let mut auth_state = use_auth();
    let mut notifications = crate::use_notifications();

    let onclick = move |_| {
        app.session_controller().logout();
        auth_state.write().sign_out();
        notify(&mut notifications, NoticeLevel::Success, "Logged out successfully");
        on_logged_out.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
