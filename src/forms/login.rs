//! Login form state and reducer. A successful authentication asks the
//! controller to persist the session and navigate home; a rejection surfaces
//! the server message as a form-level banner.

use super::{
    field::{Field, FieldState},
    submission::{GENERIC_ERROR, SubmissionState},
    validators::login_errors,
};
use crate::{
    app_lib::AppError,
    features::{auth::types::LoginRequest, users::types::User},
    routes::paths,
};
use tracing::{debug, info, warn};

#[derive(Clone, Debug)]
pub enum LoginMsg {
    Input(Field, String),
    Blur(Field),
    Submit,
    Authenticated(Result<User, AppError>),
    /// The session for an accepted login could not be stored.
    SessionNotSaved,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginEffect {
    Authenticate(LoginRequest),
    PersistSession(User),
    Navigate(String),
}

#[derive(Debug, Default)]
pub struct LoginForm {
    email: FieldState,
    password: FieldState,
    submission: SubmissionState,
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        let mut form = Self::default();
        for field in [Field::Email, Field::Password] {
            form.revalidate(field);
        }
        form
    }

    pub fn update(&mut self, msg: LoginMsg) -> Vec<LoginEffect> {
        match msg {
            LoginMsg::Input(field, value) => {
                if let Some(state) = self.field_mut(field) {
                    state.set_value(value);
                    self.submission.clear_error();
                    self.revalidate(field);
                } else {
                    debug!(field = field.name(), "login form has no such field");
                }
                Vec::new()
            }
            LoginMsg::Blur(field) => {
                if let Some(state) = self.field_mut(field) {
                    state.blur();
                }
                Vec::new()
            }
            LoginMsg::Submit => {
                if !self.can_submit() || !self.submission.begin() {
                    debug!("ignoring submit while disabled");
                    return Vec::new();
                }
                info!("submitting login");
                vec![LoginEffect::Authenticate(LoginRequest {
                    email: self.email.value.trim().to_string(),
                    password: self.password.value.clone(),
                })]
            }
            LoginMsg::Authenticated(Ok(user)) => {
                info!(user_id = user.id, "login accepted");
                self.submission.succeed();
                vec![
                    LoginEffect::PersistSession(user),
                    LoginEffect::Navigate(paths::HOME.to_string()),
                ]
            }
            LoginMsg::Authenticated(Err(err)) => {
                warn!("login rejected: {err}");
                self.submission.fail(Some(rejection_banner(&err)));
                Vec::new()
            }
            LoginMsg::SessionNotSaved => {
                warn!("login accepted but the session was not stored");
                self.submission.fail(Some(GENERIC_ERROR.to_string()));
                Vec::new()
            }
        }
    }

    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.email.is_blank()
            && !self.password.is_blank()
            && self.email.errors.is_empty()
            && self.password.errors.is_empty()
            && !self.submission.in_progress()
            && !self.submission.succeeded()
    }

    #[must_use]
    pub fn field(&self, field: Field) -> Option<&FieldState> {
        match field {
            Field::Email => Some(&self.email),
            Field::Password => Some(&self.password),
            _ => None,
        }
    }

    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.field(field)
            .and_then(FieldState::visible_error)
            .map(|kind| field.message(kind))
    }

    #[must_use]
    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.submission.in_progress()
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.submission.last_error()
    }

    fn field_mut(&mut self, field: Field) -> Option<&mut FieldState> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            _ => None,
        }
    }

    fn revalidate(&mut self, field: Field) {
        if let Some(state) = self.field_mut(field) {
            let errors = login_errors(field, &state.value);
            state.set_local_errors(errors);
        }
    }
}

/// Client errors carrying a flat message show it verbatim; anything else is
/// generic.
fn rejection_banner(err: &AppError) -> String {
    match (err.status(), err.server_message()) {
        (Some(status), Some(message)) if (400..500).contains(&status) => message,
        _ => GENERIC_ERROR.to_string(),
    }
}
