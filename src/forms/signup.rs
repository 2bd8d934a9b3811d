//! Sign-up form state and reducer.
//!
//! Flow Overview: every input re-runs the field validators and the password
//! match; a locally valid email schedules a debounced availability check. Submit
//! is only honoured when the aggregator allows it, and the backend verdict is
//! routed to the field it names or to the form-level banner.

use super::{
    field::{ErrorKind, Field, FieldState},
    matching::password_mismatch,
    submission::{GENERIC_ERROR, SubmissionState},
    uniqueness::{CheckOutcome, CheckTicket, UniquenessCheck},
    validators::sign_up_errors,
};
use crate::{app_lib::AppError, features::auth::types::SignUpRequest};
use tracing::{debug, info, warn};

pub const SIGN_UP_SUCCESS: &str = "Please check your e-mail to activate your account";

#[derive(Clone, Debug)]
pub enum SignUpMsg {
    Input(Field, String),
    Blur(Field),
    /// The debounce window for `ticket` elapsed.
    EmailCheckDue(CheckTicket),
    EmailChecked(CheckTicket, CheckOutcome),
    Submit,
    Submitted(Result<(), AppError>),
}

/// Work the controller must perform on behalf of the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignUpEffect {
    /// Start the debounce timer, then send back `EmailCheckDue`.
    ScheduleEmailCheck(CheckTicket),
    /// Query the backend, then send back `EmailChecked`.
    CheckEmail(CheckTicket),
    /// Post the account, then send back `Submitted`.
    Submit(SignUpRequest),
}

#[derive(Debug, Default)]
pub struct SignUpForm {
    username: FieldState,
    email: FieldState,
    password: FieldState,
    confirm_password: FieldState,
    email_check: UniquenessCheck,
    submission: SubmissionState,
}

impl SignUpForm {
    #[must_use]
    pub fn new() -> Self {
        let mut form = Self::default();
        form.revalidate();
        form
    }

    pub fn update(&mut self, msg: SignUpMsg) -> Option<SignUpEffect> {
        match msg {
            SignUpMsg::Input(field, value) => {
                self.field_mut(field).set_value(value);
                self.submission.clear_error();
                self.revalidate();
                (field == Field::Email)
                    .then(|| self.refresh_email_check())
                    .flatten()
            }
            SignUpMsg::Blur(field) => {
                self.field_mut(field).blur();
                None
            }
            SignUpMsg::EmailCheckDue(ticket) => {
                if self.email_check.is_current(&ticket) {
                    Some(SignUpEffect::CheckEmail(ticket))
                } else {
                    debug!(seq = ticket.seq, "skipping superseded email check");
                    None
                }
            }
            SignUpMsg::EmailChecked(ticket, outcome) => {
                self.apply_email_check(&ticket, outcome);
                None
            }
            SignUpMsg::Submit => {
                if !self.can_submit() || !self.submission.begin() {
                    debug!("ignoring submit while disabled");
                    return None;
                }
                info!("submitting sign-up");
                Some(SignUpEffect::Submit(self.request()))
            }
            SignUpMsg::Submitted(result) => {
                match result {
                    Ok(()) => {
                        info!("sign-up accepted");
                        self.submission.succeed();
                    }
                    Err(err) => self.apply_rejection(&err),
                }
                None
            }
        }
    }

    /// Submit is enabled iff every field is filled and error free, no
    /// availability check is pending and nothing is in flight.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        let fields = self.fields();
        fields.iter().all(|field| !field.is_blank())
            && fields.iter().all(|field| field.errors.is_empty())
            && !self.email_check.is_pending()
            && !self.submission.in_progress()
            && !self.submission.succeeded()
    }

    #[must_use]
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    /// Message shown under `field`, if any.
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.field(field)
            .visible_error()
            .map(|kind| field.message(kind))
    }

    #[must_use]
    pub fn is_email_pending(&self) -> bool {
        self.email_check.is_pending()
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
    pub fn is_form_visible(&self) -> bool {
        !self.submission.succeeded()
    }

    #[must_use]
    pub fn success_message(&self) -> Option<&'static str> {
        self.submission.succeeded().then_some(SIGN_UP_SUCCESS)
    }

    #[must_use]
    pub fn banner(&self) -> Option<&str> {
        self.submission.last_error()
    }

    fn fields(&self) -> [&FieldState; 4] {
        [
            &self.username,
            &self.email,
            &self.password,
            &self.confirm_password,
        ]
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }

    fn revalidate(&mut self) {
        for field in [Field::Username, Field::Email, Field::Password] {
            let errors = sign_up_errors(field, &self.field(field).value);
            self.field_mut(field).set_local_errors(errors);
        }

        let mismatch = password_mismatch(&self.password.value, &self.confirm_password.value);
        let mut confirm_errors = sign_up_errors(Field::ConfirmPassword, &self.confirm_password.value);
        confirm_errors.extend(mismatch);
        self.confirm_password.set_local_errors(confirm_errors);
    }

    fn refresh_email_check(&mut self) -> Option<SignUpEffect> {
        self.email.errors.remove(&ErrorKind::EmailTaken);

        if self.email.has_local_errors() {
            self.email_check.cancel();
            return None;
        }

        let ticket = self.email_check.request(self.email.value.trim());
        debug!(seq = ticket.seq, "email check scheduled");
        Some(SignUpEffect::ScheduleEmailCheck(ticket))
    }

    fn apply_email_check(&mut self, ticket: &CheckTicket, outcome: CheckOutcome) {
        match self.email_check.resolve(ticket, outcome) {
            None => debug!(seq = ticket.seq, "discarding stale email check result"),
            Some(CheckOutcome::Taken) => {
                self.email.errors.insert(ErrorKind::EmailTaken);
            }
            Some(CheckOutcome::Available) => {}
            Some(CheckOutcome::Failed) => {
                // Fail-open: an indeterminate check does not block the user.
                warn!(seq = ticket.seq, "email check failed, treating email as available");
            }
        }
    }

    fn apply_rejection(&mut self, err: &AppError) {
        warn!("sign-up rejected: {err}");

        let mut banner = None;
        match err.validation_errors() {
            Some(errors) if err.status() == Some(400) && !errors.is_empty() => {
                for (name, message) in errors {
                    match Field::from_name(&name) {
                        Some(field) => {
                            self.field_mut(field)
                                .errors
                                .insert(ErrorKind::BackendRejected(message));
                        }
                        None => banner = Some(message),
                    }
                }
            }
            _ => banner = Some(GENERIC_ERROR.to_string()),
        }

        self.submission.fail(banner);
    }

    fn request(&self) -> SignUpRequest {
        SignUpRequest {
            username: self.username.value.trim().to_string(),
            email: self.email.value.trim().to_string(),
            password: self.password.value.clone(),
        }
    }
}
