//! Client-side form validation for the login and registration forms.
//!
//! Every rule is checked; a form with several problems reports all of them at
//! once so each field can show its own message.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Minimum password length accepted by the forms.
pub const MIN_PASSWORD_LEN: usize = 6;
/// Minimum display name length on registration.
pub const MIN_NAME_LEN: usize = 2;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// A form input that can carry an inline error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

impl Field {
    /// DOM id of the element showing this field's error.
    pub fn error_id(&self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Password => "passwordError",
            Field::ConfirmPassword => "confirmPasswordError",
            Field::Terms => "termsError",
        }
    }
}

/// Per-field validation messages.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Registration form input as typed by the user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

/// `local@domain.tld` shape: no whitespace, one `@`, a dot inside the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate login input. `email` is expected to be trimmed already.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !is_valid_email(email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, "Password must be at least 6 characters");
    }
    errors
}

/// Validate registration input; name and email are trimmed before checking.
pub fn validate_registration(form: &RegistrationForm) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.name.trim().chars().count() < MIN_NAME_LEN {
        errors.insert(Field::Name, "Name must be at least 2 characters");
    }
    if !is_valid_email(form.email.trim()) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(Field::Password, "Password must be at least 6 characters");
    }
    if form.password != form.confirm_password {
        errors.insert(Field::ConfirmPassword, "Passwords do not match");
    }
    if !form.terms_accepted {
        errors.insert(Field::Terms, "You must agree to the terms and conditions");
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("mei@example.com"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email("bad"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@.b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_login_reports_both_errors() {
        let errors = validate_login("nope", "123");
        assert_eq!(errors.len(), 2);
        assert!(errors.get(Field::Email).is_some());
        assert!(errors.get(Field::Password).is_some());

        assert!(validate_login("mei@example.com", "secret").is_empty());
    }

    #[test]
    fn test_registration_reports_every_failing_rule() {
        let form = RegistrationForm {
            name: "A".to_string(),
            email: "bad".to_string(),
            password: "123".to_string(),
            confirm_password: "124".to_string(),
            terms_accepted: false,
        };
        let errors = validate_registration(&form);
        assert_eq!(errors.len(), 5);
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![
                Field::Name,
                Field::Email,
                Field::Password,
                Field::ConfirmPassword,
                Field::Terms
            ]
        );
        assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match"));
    }

    #[test]
    fn test_registration_trims_name() {
        let form = RegistrationForm {
            name: "  B  ".to_string(),
            email: " mei@example.com ".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
            terms_accepted: true,
        };
        let errors = validate_registration(&form);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Name]);
    }
}
