use super::validators::USERNAME_MIN_LENGTH;
use std::collections::BTreeSet;

/// Validation failure tags. Declaration order is surfacing precedence: the
/// smallest error in a field's set is the one shown.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
    Required,
    TooShort,
    InvalidFormat,
    PasswordMismatch,
    EmailTaken,
    BackendRejected(String),
}

impl ErrorKind {
    /// Errors recomputed from the current values on every change.
    #[must_use]
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Required | Self::TooShort | Self::InvalidFormat | Self::PasswordMismatch
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Wire name used by the backend in `validationErrors`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "username" => Some(Self::Username),
            "email" => Some(Self::Email),
            "password" => Some(Self::Password),
            "confirmPassword" => Some(Self::ConfirmPassword),
            _ => None,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    /// User-facing text for `kind` on this field.
    #[must_use]
    pub fn message(self, kind: &ErrorKind) -> String {
        match (self, kind) {
            (_, ErrorKind::Required) => format!("{} is required", self.label()),
            (_, ErrorKind::TooShort) => format!(
                "{} must be at least {USERNAME_MIN_LENGTH} characters long",
                self.label()
            ),
            (Self::Email, ErrorKind::InvalidFormat) => "Invalid email address".to_string(),
            (Self::Password, ErrorKind::InvalidFormat) => {
                "Password must have at least 1 uppercase, 1 lowercase letter and 1 number"
                    .to_string()
            }
            (_, ErrorKind::InvalidFormat) => {
                format!("Invalid {}", self.label().to_lowercase())
            }
            (_, ErrorKind::PasswordMismatch) => "Password mismatch".to_string(),
            (_, ErrorKind::EmailTaken) => "Email in use".to_string(),
            (_, ErrorKind::BackendRejected(message)) => message.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub dirty: bool,
    pub errors: BTreeSet<ErrorKind>,
}

impl FieldState {
    /// Applies user input. A new value invalidates any backend message for
    /// this field.
    pub fn set_value(&mut self, value: String) {
        self.value = value;
        self.dirty = true;
        self.errors
            .retain(|error| !matches!(error, ErrorKind::BackendRejected(_)));
    }

    pub fn blur(&mut self) {
        self.touched = true;
    }

    /// Replaces the locally computed errors, keeping async and backend ones.
    pub fn set_local_errors(&mut self, local: impl IntoIterator<Item = ErrorKind>) {
        self.errors.retain(|error| !error.is_local());
        self.errors.extend(local);
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    #[must_use]
    pub fn has_local_errors(&self) -> bool {
        self.errors.iter().any(ErrorKind::is_local)
    }

    #[must_use]
    pub fn primary_error(&self) -> Option<&ErrorKind> {
        self.errors.iter().next()
    }

    /// The primary error, once the user has interacted with the field.
    #[must_use]
    pub fn visible_error(&self) -> Option<&ErrorKind> {
        if self.touched || self.dirty {
            self.primary_error()
        } else {
            None
        }
    }
}
