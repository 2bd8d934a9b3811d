//! Auth state owned by the top-level application and passed by reference to
//! whichever route needs it. Reads happen once at startup through `restore`;
//! writes are explicit `set_logged_in_user` / `logout` calls.

use crate::{
    app_lib::ApiClient,
    features::{
        auth::{
            client,
            session::{Session, SessionError, SessionStore},
        },
        users::types::User,
    },
};
use tracing::{info, warn};

#[derive(Debug)]
pub struct AuthContext<S: SessionStore> {
    session: Session,
    store: S,
}

impl<S: SessionStore> AuthContext<S> {
    /// Restores the stored session. Missing or unreadable data yields the
    /// logged-out default.
    pub fn restore(store: S) -> Self {
        let session = match store.load() {
            Ok(Some(session)) => session,
            Ok(None) => Session::default(),
            Err(err) => {
                warn!("ignoring stored session: {err}");
                Session::default()
            }
        };

        Self { session, store }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_logged_in
    }

    /// Persists a logged-in session for `user`, then adopts it.
    ///
    /// # Errors
    /// Returns an error if the session cannot be written; the in-memory state
    /// is left unchanged.
    pub fn set_logged_in_user(&mut self, user: &User) -> Result<(), SessionError> {
        let session = Session::logged_in(user);
        self.store.save(&session)?;
        self.session = session;
        info!(user_id = user.id, "session started");
        Ok(())
    }

    /// Clears the stored and in-memory session.
    ///
    /// # Errors
    /// Returns an error if the stored session cannot be removed.
    pub fn clear_session(&mut self) -> Result<(), SessionError> {
        self.session = Session::default();
        self.store.clear()
    }

    /// Clears the local session, then tells the backend. A failed backend call
    /// is logged and otherwise ignored.
    ///
    /// # Errors
    /// Returns an error if the stored session cannot be removed.
    pub async fn logout(&mut self, api: &ApiClient) -> Result<(), SessionError> {
        let user_id = self.session.id;
        self.clear_session()?;
        info!(user_id, "session cleared");

        if let Err(err) = client::logout(api).await {
            warn!("logout request failed: {err}");
        }

        Ok(())
    }
}
