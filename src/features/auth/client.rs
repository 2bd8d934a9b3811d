//! Client wrappers for the auth endpoints. Endpoint paths live here so routes
//! never build URLs themselves.

use crate::{
    app_lib::{ApiClient, AppError, path_segment},
    features::{
        auth::types::{EmailAvailability, EmailCheckRequest, LoginRequest, SignUpRequest},
        users::types::User,
    },
};
use serde_json::json;

/// Creates a new, not yet activated, account.
pub async fn sign_up(api: &ApiClient, request: &SignUpRequest) -> Result<(), AppError> {
    api.post_json("/api/1.0/users", request).await
}

/// Asks the backend whether `email` already belongs to an account.
/// `200` means taken, `404` means available; anything else is an error.
pub async fn check_email(api: &ApiClient, email: &str) -> Result<EmailAvailability, AppError> {
    match api
        .post_json("/api/1.0/user/email", &EmailCheckRequest { email })
        .await
    {
        Ok(()) => Ok(EmailAvailability::Taken),
        Err(err) if err.status() == Some(404) => Ok(EmailAvailability::Available),
        Err(err) => Err(err),
    }
}

/// Activates the account behind an emailed token.
pub async fn activate(api: &ApiClient, token: &str) -> Result<(), AppError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("Activation token is required.".to_string()));
    }

    let token = path_segment(trimmed)?;
    api.post_json(&format!("/api/1.0/users/token/{token}"), &json!({}))
        .await
}

/// Authenticates and returns the logged-in user.
pub async fn authenticate(api: &ApiClient, request: &LoginRequest) -> Result<User, AppError> {
    api.post_json_response("/api/1.0/auth", request).await
}

/// Ends the server-side session.
pub async fn logout(api: &ApiClient) -> Result<(), AppError> {
    api.post_json("/api/1.0/logout", &json!({})).await
}
