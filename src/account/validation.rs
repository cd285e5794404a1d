// SPDX-License-Identifier: MPL-2.0
//! Form field validation.
//!
//! Validators mirror the account service's form rules. Every failing field is
//! reported at once, so the user fixes a form in one pass instead of
//! replaying submissions. Messages are i18n keys, resolved at render time.

use super::port::{Credentials, PasswordReset, Registration};

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form field that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

/// Per-field validation errors, in field-declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(Field, &'static str)>);

impl FieldErrors {
    /// Records an error key for a field.
    pub fn push(&mut self, field: Field, message_key: &'static str) {
        self.0.push((field, message_key));
    }

    /// Returns the first error key recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, key)| *key)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Shape check for e-mail addresses: one `@` with a dotted domain.
/// Deliverability is the service's problem, not the form's.
#[must_use]
pub fn is_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && domain.contains('.')
                && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

pub fn validate_sign_in(credentials: &Credentials) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, &credentials.email);
    if credentials.password.is_empty() {
        errors.push(Field::Password, "validation-password-required");
    }
    errors.into_result()
}

pub fn validate_sign_up(registration: &Registration) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    if registration.name.trim().is_empty() {
        errors.push(Field::Name, "validation-name-required");
    }
    check_email(&mut errors, &registration.email);
    if registration.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(Field::Password, "validation-password-min");
    }
    errors.into_result()
}

pub fn validate_password_reset(reset: &PasswordReset) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    check_email(&mut errors, &reset.email);
    if reset.password.is_empty() {
        errors.push(Field::Password, "validation-password-required");
    }
    if reset.confirmation != reset.password {
        errors.push(
            Field::PasswordConfirmation,
            "validation-confirmation-mismatch",
        );
    }
    errors.into_result()
}

fn check_email(errors: &mut FieldErrors, email: &str) {
    if email.is_empty() {
        errors.push(Field::Email, "validation-email-required");
    } else if !is_email(email) {
        errors.push(Field::Email, "validation-email-invalid");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape_accepts_plain_addresses() {
        assert!(is_email("joao@example.com"));
        assert!(is_email("a.b+c@sub.domain.org"));
    }

    #[test]
    fn email_shape_rejects_malformed_addresses() {
        assert!(!is_email(""));
        assert!(!is_email("semarroba.com"));
        assert!(!is_email("dois@arro@bas.com"));
        assert!(!is_email("@example.com"));
        assert!(!is_email("joao@"));
        assert!(!is_email("joao@semdominio"));
        assert!(!is_email("joao@.com"));
        assert!(!is_email("espa co@example.com"));
    }

    #[test]
    fn sign_in_reports_every_empty_field_at_once() {
        let errors = validate_sign_in(&Credentials {
            email: String::new(),
            password: String::new(),
        })
        .unwrap_err();

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Email), Some("validation-email-required"));
        assert_eq!(
            errors.get(Field::Password),
            Some("validation-password-required")
        );
    }

    #[test]
    fn sign_in_flags_malformed_email() {
        let errors = validate_sign_in(&Credentials {
            email: "not-an-email".to_string(),
            password: "123456".to_string(),
        })
        .unwrap_err();

        assert_eq!(errors.get(Field::Email), Some("validation-email-invalid"));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn sign_up_requires_name_and_long_enough_password() {
        let errors = validate_sign_up(&Registration {
            name: "  ".to_string(),
            email: "maria@example.com".to_string(),
            password: "12345".to_string(),
        })
        .unwrap_err();

        assert_eq!(errors.get(Field::Name), Some("validation-name-required"));
        assert_eq!(errors.get(Field::Password), Some("validation-password-min"));
    }

    #[test]
    fn sign_up_accepts_a_clean_registration() {
        assert!(validate_sign_up(&Registration {
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
            password: "123456".to_string(),
        })
        .is_ok());
    }

    #[test]
    fn reset_flags_mismatched_confirmation() {
        let errors = validate_password_reset(&PasswordReset {
            email: "maria@example.com".to_string(),
            password: "novasenha".to_string(),
            confirmation: "outrasenha".to_string(),
        })
        .unwrap_err();

        assert_eq!(
            errors.get(Field::PasswordConfirmation),
            Some("validation-confirmation-mismatch")
        );
    }

    #[test]
    fn reset_accepts_matching_passwords() {
        assert!(validate_password_reset(&PasswordReset {
            email: "maria@example.com".to_string(),
            password: "novasenha".to_string(),
            confirmation: "novasenha".to_string(),
        })
        .is_ok());
    }
}
