//! Auth feature covering sign-up, email availability, activation, login,
//! logout and the persisted session. Request types hold plaintext passwords
//! only for the duration of a request and redact them in `Debug` output.
//!
//! Flow Overview: sign-up posts the new account and asks the user to activate it
//! by email. Activation posts the emailed token. Login posts credentials and
//! persists the returned user as the session.

pub mod client;
pub mod session;
pub mod state;
pub mod types;
