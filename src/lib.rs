//! # Userportal
//!
//! `userportal` is a client for the user service REST API. It covers account
//! sign-up, email activation, login/logout and paginated user browsing.
//!
//! ## Forms
//!
//! Every form is an explicit struct of field states driven by a reducer
//! (`update(&mut self, msg) -> effects`). Route controllers feed user input into
//! the reducer, run the effects it returns (HTTP calls, debounce timers, session
//! writes, navigation) and feed the results back in as messages.
//!
//! - **Sign-up:** username, email, password and confirmation are validated
//!   locally. The email is additionally checked for availability against
//!   `/api/1.0/user/email` after a debounce window; only the latest check may
//!   change the field.
//! - **Login:** a `401` surfaces the server message as a banner; success persists
//!   the session and navigates home.
//!
//! ## Session
//!
//! The logged-in user is owned by [`features::auth::state::AuthContext`] and
//! saved through a [`features::auth::session::SessionStore`]. Passwords are never
//! stored or logged.

pub mod app_lib;
pub mod cli;
pub mod features;
pub mod forms;
pub mod routes;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with("userportal/"));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
