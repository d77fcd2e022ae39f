//! Login, registration and logout against the backend and session storage.
//!
//! [`SessionController`] owns no UI. It validates input, calls the API, and
//! writes the resulting [`Session`] to storage; the views decide what to show
//! and when to navigate.

use api::{ApiError, LoginRequest, RecipeApi, RegisterRequest};
use store::{KeyValueStore, Session, SessionStore};
use thiserror::Error;

use crate::validation::{validate_login, validate_registration, FieldErrors, RegistrationForm};

const LOGIN_OK: &str = "Login successful!";
const LOGIN_REJECTED: &str = "Login failed. Please check your credentials.";
const REGISTER_OK: &str = "Registration successful!";
const REGISTER_REJECTED: &str = "Registration failed. Please try again.";

/// Why a login or registration did not produce a session.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// Local validation failed; no request was sent.
    #[error("Please correct the highlighted fields")]
    Invalid(FieldErrors),

    /// The server refused; carries its message verbatim.
    #[error("{0}")]
    Rejected(String),

    /// The request did not complete.
    #[error("{0}")]
    Transport(String),
}

impl SessionError {
    /// Field errors to render inline, if this was a validation failure.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            SessionError::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    fn from_api(err: ApiError, rejected_fallback: &str, action: &str) -> Self {
        match err {
            ApiError::Rejected { .. } => SessionError::Rejected(
                err.server_message().unwrap_or(rejected_fallback).to_string(),
            ),
            ApiError::Transport(e) => SessionError::Transport(format!("{action} failed: {e}")),
        }
    }
}

/// A freshly established session and the notification text to show for it.
#[derive(Clone, Debug, PartialEq)]
pub struct SignedIn {
    pub session: Session,
    pub message: String,
}

/// Session lifecycle operations over an API client and session storage.
#[derive(Clone, Debug)]
pub struct SessionController<A, S: KeyValueStore> {
    api: A,
    sessions: SessionStore<S>,
}

impl<A: RecipeApi, S: KeyValueStore> SessionController<A, S> {
    pub fn new(api: A, sessions: SessionStore<S>) -> Self {
        Self { api, sessions }
    }

    /// The currently stored session, if any.
    pub fn current(&self) -> Option<Session> {
        self.sessions.load()
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SignedIn, SessionError> {
        let email = email.trim();
        let errors = validate_login(email, password);
        if !errors.is_empty() {
            return Err(SessionError::Invalid(errors));
        }

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match self.api.login(request).await {
            Ok(response) => {
                let session = Session::new(response.token, response.user);
                self.sessions.save(&session);
                tracing::info!("Signed in as {}", session.user.display_name());
                Ok(SignedIn {
                    session,
                    message: response.message.unwrap_or_else(|| LOGIN_OK.to_string()),
                })
            }
            Err(e) => {
                tracing::warn!("Login failed: {}", e);
                Err(SessionError::from_api(e, LOGIN_REJECTED, "Login"))
            }
        }
    }

    pub async fn register(&self, form: &RegistrationForm) -> Result<SignedIn, SessionError> {
        let errors = validate_registration(form);
        if !errors.is_empty() {
            return Err(SessionError::Invalid(errors));
        }

        let request = RegisterRequest {
            username: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
        };
        match self.api.register(request).await {
            Ok(response) => {
                let session = Session::new(response.token, response.user);
                self.sessions.save(&session);
                tracing::info!("Registered {}", session.user.display_name());
                Ok(SignedIn {
                    session,
                    message: response.message.unwrap_or_else(|| REGISTER_OK.to_string()),
                })
            }
            Err(e) => {
                tracing::warn!("Registration failed: {}", e);
                Err(SessionError::from_api(e, REGISTER_REJECTED, "Registration"))
            }
        }
    }

    /// Forget the stored session.
    pub fn logout(&self) {
        self.sessions.clear();
        tracing::info!("Signed out");
    }
}
