use super::field::ErrorKind;

/// Cross-field check between a password and its confirmation. Two empty values
/// compare equal, so nothing fires before the user has typed.
#[must_use]
pub fn password_mismatch(password: &str, confirm_password: &str) -> Option<ErrorKind> {
    (password != confirm_password).then_some(ErrorKind::PasswordMismatch)
}
