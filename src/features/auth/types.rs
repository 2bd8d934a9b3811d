use serde::Serialize;
use std::fmt;

/// New account payload. The confirmation field never leaves the form.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Debug, Serialize)]
pub struct EmailCheckRequest<'a> {
    pub email: &'a str,
}

/// Result of the email uniqueness endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmailAvailability {
    Taken,
    Available,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sign_up_request_serializes_without_confirmation() {
        let request = SignUpRequest {
            username: "user1".to_string(),
            email: "user1@mail.com".to_string(),
            password: "P4ssword".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap_or_default();
        assert_eq!(
            value,
            json!({ "username": "user1", "email": "user1@mail.com", "password": "P4ssword" })
        );
    }

    #[test]
    fn debug_output_redacts_passwords() {
        let sign_up = SignUpRequest {
            username: "user1".to_string(),
            email: "user1@mail.com".to_string(),
            password: "P4ssword".to_string(),
        };
        let login = LoginRequest {
            email: "user1@mail.com".to_string(),
            password: "P4ssword".to_string(),
        };
        assert!(!format!("{sign_up:?}").contains("P4ssword"));
        assert!(!format!("{login:?}").contains("P4ssword"));
        assert!(format!("{login:?}").contains("***"));
    }
}
