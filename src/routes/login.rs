//! Login route controller. Holds the auth context and navigator borrowed from
//! the application for as long as the page is shown.

use super::Navigator;
use crate::{
    app_lib::ApiClient,
    features::auth::{client, session::SessionStore, state::AuthContext},
    forms::{Field, LoginEffect, LoginForm, LoginMsg},
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::error;

pub struct LoginPage<'a, S: SessionStore, N: Navigator> {
    form: LoginForm,
    api: ApiClient,
    auth: &'a mut AuthContext<S>,
    navigator: &'a mut N,
    tx: UnboundedSender<LoginMsg>,
    rx: UnboundedReceiver<LoginMsg>,
    outstanding: usize,
}

impl<'a, S: SessionStore, N: Navigator> LoginPage<'a, S, N> {
    pub fn new(api: ApiClient, auth: &'a mut AuthContext<S>, navigator: &'a mut N) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            form: LoginForm::new(),
            api,
            auth,
            navigator,
            tx,
            rx,
            outstanding: 0,
        }
    }

    #[must_use]
    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn input(&mut self, field: Field, value: impl Into<String>) {
        self.dispatch(LoginMsg::Input(field, value.into()));
    }

    pub fn blur(&mut self, field: Field) {
        self.dispatch(LoginMsg::Blur(field));
    }

    pub fn submit(&mut self) {
        self.dispatch(LoginMsg::Submit);
    }

    /// Waits for the in-flight authentication, if any, and applies it.
    pub async fn run_until_idle(&mut self) {
        while self.outstanding > 0 {
            let Some(msg) = self.rx.recv().await else {
                break;
            };
            self.outstanding -= 1;
            self.dispatch(msg);
        }
    }

    fn dispatch(&mut self, msg: LoginMsg) {
        for effect in self.form.update(msg) {
            if !self.apply(effect) {
                self.dispatch(LoginMsg::SessionNotSaved);
                break;
            }
        }
    }

    /// Returns `false` when the effect failed and the rest must be skipped.
    fn apply(&mut self, effect: LoginEffect) -> bool {
        match effect {
            LoginEffect::Authenticate(request) => {
                let api = self.api.clone();
                let tx = self.tx.clone();
                self.outstanding += 1;
                tokio::spawn(async move {
                    let result = client::authenticate(&api, &request).await;
                    let _ = tx.send(LoginMsg::Authenticated(result));
                });
            }
            LoginEffect::PersistSession(user) => {
                if let Err(err) = self.auth.set_logged_in_user(&user) {
                    error!("failed to persist session: {err}");
                    return false;
                }
            }
            LoginEffect::Navigate(path) => self.navigator.navigate(&path),
        }
        true
    }
}
