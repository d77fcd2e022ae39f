use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::context::use_app;
use crate::guard::PageRole;
use crate::notification::{notify, use_notifications, NoticeLevel};
use crate::validation::{Field, FieldErrors, RegistrationForm};

/// One labelled input with its inline error.
#[component]
fn FormField(
    field: Field,
    id: String,
    label: String,
    input_type: String,
    value: String,
    error: Option<&'static str>,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            label { r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                r#type: "{input_type}",
                class: if error.is_some() { "error" } else { "" },
                value: "{value}",
                oninput: move |evt| on_input.call(evt.value()),
            }
            if let Some(msg) = error {
                div { id: field.error_id(), class: "error-message", "{msg}" }
            }
        }
    }
}

#[component]
pub fn RegisterPage(on_navigate: EventHandler<PageRole>) -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let mut notifications = use_notifications();

    let mut form = use_signal(RegistrationForm::default);
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
            let snapshot = form();
            match app.session_controller().register(&snapshot).await {
                Ok(signed_in) => {
                    notify(&mut notifications, NoticeLevel::Success, &signed_in.message);
                    // The shell redirects to the dashboard once the hold expires.
                    auth.write().sign_in(signed_in.session, app.config.ui.register_redirect_ms);
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

    let current = form();
    let errs = errors();
    let terms_error = errs.get(Field::Terms);
    let submit_label = if submitting() { "Creating account..." } else { "Create Account" };

    rsx! {
        section {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Join the Community" }
                p { class: "auth-subtitle", "Create an account to share your recipes." }

                form {
                    id: "register-form",
                    novalidate: true,
                    onsubmit: onsubmit,

                    FormField {
                        field: Field::Name,
                        id: "name",
                        label: "Name",
                        input_type: "text",
                        value: current.name.clone(),
                        error: errs.get(Field::Name),
                        on_input: move |v| form.write().name = v,
                    }
                    FormField {
                        field: Field::Email,
                        id: "email",
                        label: "Email",
                        input_type: "email",
                        value: current.email.clone(),
                        error: errs.get(Field::Email),
                        on_input: move |v| form.write().email = v,
                    }
                    FormField {
                        field: Field::Password,
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        value: current.password.clone(),
                        error: errs.get(Field::Password),
                        on_input: move |v| form.write().password = v,
                    }
                    FormField {
                        field: Field::ConfirmPassword,
                        id: "confirm-password",
                        label: "Confirm Password",
                        input_type: "password",
                        value: current.confirm_password.clone(),
                        error: errs.get(Field::ConfirmPassword),
                        on_input: move |v| form.write().confirm_password = v,
                    }

                    div {
                        class: "form-group checkbox-group",
                        input {
                            id: "terms",
                            r#type: "checkbox",
                            checked: current.terms_accepted,
                            onchange: move |evt| form.write().terms_accepted = evt.checked(),
                        }
                        label { r#for: "terms", "I agree to the terms and conditions" }
                        if let Some(msg) = terms_error {
                            div { id: Field::Terms.error_id(), class: "error-message", "{msg}" }
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
                    "Already have an account? "
                    a {
                        href: PageRole::Login.path(),
                        onclick: move |evt| {
                            evt.prevent_default();
                            on_navigate.call(PageRole::Login);
                        },
                        "Login"
                    }
                }
            }
        }
    }
}
