//! Pure field validators. Each returns the violated constraint, if any; the
//! per-field rule sets combine them and report only `Required` for blank input.

use super::field::{ErrorKind, Field};
use once_cell::sync::Lazy;
use regex::Regex;

pub const USERNAME_MIN_LENGTH: usize = 4;

static EMAIL_RE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

#[must_use]
pub fn required(value: &str) -> Option<ErrorKind> {
    value.trim().is_empty().then_some(ErrorKind::Required)
}

/// Counts characters of the trimmed value, which is what gets submitted.
#[must_use]
pub fn min_length(value: &str, min: usize) -> Option<ErrorKind> {
    (value.trim().chars().count() < min).then_some(ErrorKind::TooShort)
}

#[must_use]
pub fn email_format(value: &str) -> Option<ErrorKind> {
    let valid = EMAIL_RE
        .as_ref()
        .is_some_and(|re| re.is_match(value.trim()));
    (!valid).then_some(ErrorKind::InvalidFormat)
}

/// At least one uppercase letter, one lowercase letter and one digit.
#[must_use]
pub fn password_strength(value: &str) -> Option<ErrorKind> {
    let valid = value.chars().any(char::is_uppercase)
        && value.chars().any(char::is_lowercase)
        && value.chars().any(|c| c.is_ascii_digit());
    (!valid).then_some(ErrorKind::InvalidFormat)
}

/// Sign-up rules for one field. The confirmation has no rules of its own; it
/// is checked against the password by the cross-field validator.
#[must_use]
pub fn sign_up_errors(field: Field, value: &str) -> Vec<ErrorKind> {
    if let Some(error) = required(value) {
        return match field {
            Field::ConfirmPassword => Vec::new(),
            _ => vec![error],
        };
    }

    let checks = match field {
        Field::Username => min_length(value, USERNAME_MIN_LENGTH),
        Field::Email => email_format(value),
        Field::Password => password_strength(value),
        Field::ConfirmPassword => None,
    };
    checks.into_iter().collect()
}

/// Login rules: email must be present and well formed, password present.
#[must_use]
pub fn login_errors(field: Field, value: &str) -> Vec<ErrorKind> {
    if let Some(error) = required(value) {
        return vec![error];
    }

    match field {
        Field::Email => email_format(value).into_iter().collect(),
        _ => Vec::new(),
    }
}
