//! Login page view.

use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::context::use_app;
use crate::guard::PageRole;
use crate::notification::{notify, use_notifications, NoticeLevel};
use crate::validation::{Field, FieldErrors};

/// Email and password sign-in form.
///
/// On success the session lands in storage and in the shared state together.
/// The state carries a redirect hold, and the shell moves on to the dashboard
/// once it expires.
#[component]
pub fn LoginPage(on_navigate: EventHandler<PageRole>) -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let mut notifications = use_notifications();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::new);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let app = app.clone();
        spawn(async move {
            submitting.set(true);
            errors.set(FieldErrors::new());
            match app.session_controller().login(&email(), &password()).await {
                Ok(signed_in) => {
                    notify(&mut notifications, NoticeLevel::Success, &signed_in.message);
                    // The shell redirects to the dashboard once the hold expires.
                    auth.write().sign_in(signed_in.session, app.config.ui.login_redirect_ms);
                }
                Err(e) => {
                    match e.field_errors() {
                        Some(fields) => errors.set(fields.clone()),
                        None => notify(&mut notifications, NoticeLevel::Error, &e.to_string()),
                    }
                    submitting.set(false);
                }
            }
        });
    };

    let email_error = errors.read().get(Field::Email);
    let password_error = errors.read().get(Field::Password);
    let submit_label = if submitting() { "Logging in..." } else { "Login" };

    rsx! {
        section {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Welcome Back" }
                p { class: "auth-subtitle", "Log in to manage your recipes." }

                form {
                    id: "login-form",
                    novalidate: true,
                    onsubmit: onsubmit,

                    div {
                        class: "form-group",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            class: if email_error.is_some() { "error" } else { "" },
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        if let Some(msg) = email_error {
                            div { id: Field::Email.error_id(), class: "error-message", "{msg}" }
                        }
                    }

                    div {
                        class: "form-group",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            class: if password_error.is_some() { "error" } else { "" },
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                        if let Some(msg) = password_error {
                            div { id: Field::Password.error_id(), class: "error-message", "{msg}" }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn btn-primary btn-block",
                        disabled: submitting(),
                        "{submit_label}"
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    a {
                        href: PageRole::Register.path(),
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_navigate.call(PageRole::Register);
                        },
                        "Register"
                    }
                }
            }
        }
    }
}
