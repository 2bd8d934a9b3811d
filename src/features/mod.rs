//! Domain features (auth, users) and their API clients. Routes import these
//! modules so controllers stay focused on state transitions.

pub mod auth;
pub mod users;
