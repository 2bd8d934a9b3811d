//! Maps validated CLI matches to an [`Action`].

use crate::cli::{
    actions::Action,
    commands::{
        account::{
            ARG_EMAIL, ARG_TOKEN, CMD_ACTIVATE, CMD_CHECK_EMAIL, CMD_LOGIN, CMD_LOGOUT,
            CMD_SIGNUP, CMD_WHOAMI, LoginOptions, SignUpOptions,
        },
        api,
        users::{ARG_ID, ARG_PAGE, CMD_USER, CMD_USERS},
    },
};
use anyhow::{Context, Result, bail};

/// # Errors
/// Returns an error if the subcommand is unknown or its arguments are missing.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let Some((name, sub)) = matches.subcommand() else {
        bail!("missing subcommand");
    };

    // Global args are read from the subcommand so flags given after it count.
    let config = api::Options::parse(sub)?.to_config();

    let action = match name {
        CMD_SIGNUP => Action::SignUp {
            config,
            options: SignUpOptions::parse(sub),
        },
        CMD_CHECK_EMAIL => Action::CheckEmail {
            config,
            email: sub
                .get_one::<String>(ARG_EMAIL)
                .cloned()
                .context("missing required argument: --email")?,
        },
        CMD_ACTIVATE => Action::Activate {
            config,
            token: sub
                .get_one::<String>(ARG_TOKEN)
                .cloned()
                .context("missing required argument: <token>")?,
        },
        CMD_LOGIN => Action::Login {
            config,
            options: LoginOptions::parse(sub),
        },
        CMD_LOGOUT => Action::Logout { config },
        CMD_WHOAMI => Action::WhoAmI { config },
        CMD_USERS => Action::Users {
            config,
            page: sub.get_one::<u32>(ARG_PAGE).copied().unwrap_or(0),
        },
        CMD_USER => Action::User {
            config,
            id: sub
                .get_one::<u64>(ARG_ID)
                .copied()
                .context("missing required argument: <id>")?,
        },
        other => bail!("unknown subcommand: {other}"),
    };

    tracing::debug!(command = name, "dispatching");
    Ok(action)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::cli::commands;
    use secrecy::ExposeSecret;
    use std::time::Duration;

    fn dispatch(args: &[&str]) -> Result<Action> {
        let mut argv = vec!["userportal"];
        argv.extend_from_slice(args);
        handler(&commands::new().get_matches_from(argv))
    }

    #[test]
    fn users_page_and_api_url() {
        temp_env::with_vars([("USERPORTAL_API_URL", Some("http://api.test/"))], || {
            match dispatch(&["users", "--page", "4"]).unwrap() {
                Action::Users { config, page } => {
                    assert_eq!(page, 4);
                    assert_eq!(config.api_base_url, "http://api.test");
                }
                other => panic!("unexpected action: {other:?}"),
            }
        });
    }

    #[test]
    fn login_collects_credentials() {
        temp_env::with_vars(
            [
                ("USERPORTAL_PASSWORD", Some("P4ssword")),
                ("USERPORTAL_EMAIL_CHECK_DEBOUNCE_MS", Some("5")),
            ],
            || match dispatch(&["login", "--email", "user1@mail.com"]).unwrap() {
                Action::Login { config, options } => {
                    assert_eq!(options.email, "user1@mail.com");
                    assert_eq!(options.password.expose_secret(), "P4ssword");
                    assert_eq!(config.email_check_debounce, Duration::from_millis(5));
                }
                other => panic!("unexpected action: {other:?}"),
            },
        );
    }

    #[test]
    fn user_and_activate_take_positionals() {
        assert!(matches!(
            dispatch(&["user", "7"]).unwrap(),
            Action::User { id, .. } if id == 7
        ));
        assert!(matches!(
            dispatch(&["activate", "abcd"]).unwrap(),
            Action::Activate { token, .. } if token == "abcd"
        ));
    }

    #[test]
    fn user_id_must_be_numeric() {
        for id in ["abc", "1/../admin", "-1"] {
            assert!(
                commands::new()
                    .try_get_matches_from(["userportal", "user", id])
                    .is_err(),
                "accepted {id:?}"
            );
        }
    }

    #[test]
    fn session_commands() {
        assert!(matches!(dispatch(&["logout"]).unwrap(), Action::Logout { .. }));
        assert!(matches!(dispatch(&["whoami"]).unwrap(), Action::WhoAmI { .. }));
    }
}
