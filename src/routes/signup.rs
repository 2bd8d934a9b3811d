//! Sign-up route controller.
//!
//! Flow Overview: user input goes through [`SignUpForm::update`]; each effect
//! runs as a task that reports back exactly one message. The debounce window
//! before an email check is a timer task, and the availability request is only
//! sent if the timer's ticket is still the latest one when it fires.

use crate::{
    app_lib::ApiClient,
    features::auth::{client, types::EmailAvailability},
    forms::{CheckOutcome, Field, SignUpEffect, SignUpForm, SignUpMsg},
};
use std::time::Duration;
use tokio::{
    sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel},
    time::sleep,
};
use tracing::{debug, warn};

pub struct SignUpPage {
    form: SignUpForm,
    api: ApiClient,
    debounce: Duration,
    tx: UnboundedSender<SignUpMsg>,
    rx: UnboundedReceiver<SignUpMsg>,
    outstanding: usize,
}

impl SignUpPage {
    #[must_use]
    pub fn new(api: ApiClient, debounce: Duration) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            form: SignUpForm::new(),
            api,
            debounce,
            tx,
            rx,
            outstanding: 0,
        }
    }

    #[must_use]
    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(SignUpMsg::Input(field, value.into()));
    }

    pub fn blur(&mut self, field: Field) {
        self.dispatch(SignUpMsg::Blur(field));
    }

    /// Requests submission; a no-op while the form does not allow it.
    pub fn submit(&mut self) {
        self.dispatch(SignUpMsg::Submit);
    }

    /// Applies the next task result. Returns `false` when nothing is outstanding.
    pub async fn step(&mut self) -> bool {
        if self.outstanding == 0 {
            return false;
        }
        match self.rx.recv().await {
            Some(msg) => {
                self.outstanding -= 1;
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    /// Processes task results until no timer or request is outstanding.
    pub async fn run_until_idle(&mut self) {
        while self.step().await {}
    }

    fn dispatch(&mut self, msg: SignUpMsg) {
        if let Some(effect) = self.form.update(msg) {
            self.spawn(effect);
        }
    }

    fn spawn(&mut self, effect: SignUpEffect) {
        let tx = self.tx.clone();
        self.outstanding += 1;

        match effect {
            SignUpEffect::ScheduleEmailCheck(ticket) => {
                let debounce = self.debounce;
                tokio::spawn(async move {
                    sleep(debounce).await;
                    let _ = tx.send(SignUpMsg::EmailCheckDue(ticket));
                });
            }
            SignUpEffect::CheckEmail(ticket) => {
                let api = self.api.clone();
                tokio::spawn(async move {
                    debug!(seq = ticket.seq, "checking email availability");
                    let outcome = match client::check_email(&api, &ticket.value).await {
                        Ok(EmailAvailability::Taken) => CheckOutcome::Taken,
                        Ok(EmailAvailability::Available) => CheckOutcome::Available,
                        Err(err) => {
                            warn!(seq = ticket.seq, "email check failed: {err}");
                            CheckOutcome::Failed
                        }
                    };
                    let _ = tx.send(SignUpMsg::EmailChecked(ticket, outcome));
                });
            }
            SignUpEffect::Submit(request) => {
                let api = self.api.clone();
                tokio::spawn(async move {
                    let result = client::sign_up(&api, &request).await;
                    let _ = tx.send(SignUpMsg::Submitted(result));
                });
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::app_lib::AppConfig;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn page_for(server: &MockServer, debounce: Duration) -> SignUpPage {
        let api = ApiClient::new(&AppConfig::default().with_api_base_url(&server.uri())).unwrap();
        SignUpPage::new(api, debounce)
    }

    async fn mount_email(server: &MockServer, email: &str, status: u16, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/api/1.0/user/email"))
            .and(body_json(json!({ "email": email })))
            .respond_with(ResponseTemplate::new(status).set_delay(delay))
            .mount(server)
            .await;
    }

    fn fill_except_email(page: &mut SignUpPage) {
        page.input(Field::Username, "user1");
        page.input(Field::Password, "P4ssword");
        page.input(Field::ConfirmPassword, "P4ssword");
    }

    #[tokio::test]
    async fn debounce_sends_only_latest_email() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/1.0/user/email"))
            .and(body_json(json!({ "email": "user1@mail.com" })))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/1.0/user/email"))
            .and(body_json(json!({ "email": "user1@mail.co" })))
            .respond_with(ResponseTemplate::new(404))
            .expect(0)
            .mount(&server)
            .await;

        let mut page = page_for(&server, Duration::from_millis(50));
        fill_except_email(&mut page);
        page.input(Field::Email, "user1@mail.co");
        page.input(Field::Email, "user1@mail.com");
        page.run_until_idle().await;

        assert!(!page.form().is_email_pending());
        assert!(page.form().can_submit());
    }

    #[tokio::test]
    async fn stale_in_flight_response_is_discarded() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_email(&server, "a@mail.com", 200, Duration::from_millis(300)).await;
        mount_email(&server, "b@mail.com", 404, Duration::ZERO).await;

        let mut page = page_for(&server, Duration::ZERO);
        fill_except_email(&mut page);
        page.input(Field::Email, "a@mail.com");
        // Timer fires and A's request goes out.
        assert!(page.step().await);

        page.input(Field::Email, "b@mail.com");
        page.run_until_idle().await;

        assert_eq!(page.form().field_error(Field::Email), None);
        assert!(page.form().can_submit());
    }

    #[tokio::test]
    async fn transport_failure_fails_open() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_email(&server, "user1@mail.com", 503, Duration::ZERO).await;

        let mut page = page_for(&server, Duration::ZERO);
        fill_except_email(&mut page);
        page.input(Field::Email, "user1@mail.com");
        page.run_until_idle().await;

        assert_eq!(page.form().field_error(Field::Email), None);
        assert!(page.form().can_submit());
    }

    #[tokio::test]
    async fn rapid_double_submit_posts_once() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_email(&server, "user1@mail.com", 404, Duration::ZERO).await;
        Mock::given(method("POST"))
            .and(path("/api/1.0/users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(Duration::from_millis(100)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut page = page_for(&server, Duration::ZERO);
        fill_except_email(&mut page);
        page.input(Field::Email, "user1@mail.com");
        page.run_until_idle().await;

        page.submit();
        assert!(page.form().show_spinner());
        page.submit();
        page.run_until_idle().await;

        assert!(!page.form().is_form_visible());
        assert!(page.form().success_message().is_some());
    }
}
