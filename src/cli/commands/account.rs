use clap::{Arg, ArgMatches, Command};
use secrecy::SecretString;

pub const CMD_SIGNUP: &str = "signup";
pub const CMD_CHECK_EMAIL: &str = "check-email";
pub const CMD_ACTIVATE: &str = "activate";
pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";

pub const ARG_USERNAME: &str = "username";
pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";
pub const ARG_TOKEN: &str = "token";

#[derive(Debug, Clone)]
pub struct SignUpOptions {
    pub username: String,
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

impl SignUpOptions {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            username: string_arg(matches, ARG_USERNAME),
            email: string_arg(matches, ARG_EMAIL),
            password: secret_arg(matches, ARG_PASSWORD),
            confirm_password: secret_arg(matches, ARG_CONFIRM_PASSWORD),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoginOptions {
    pub email: String,
    pub password: SecretString,
}

impl LoginOptions {
    #[must_use]
    pub fn parse(matches: &ArgMatches) -> Self {
        Self {
            email: string_arg(matches, ARG_EMAIL),
            password: secret_arg(matches, ARG_PASSWORD),
        }
    }
}

// Missing values are left for form validation to report.
fn string_arg(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}

fn secret_arg(matches: &ArgMatches, id: &str) -> SecretString {
    SecretString::from(string_arg(matches, id))
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL).long(ARG_EMAIL).help("Email address")
}

fn password_arg() -> Arg {
    Arg::new(ARG_PASSWORD)
        .long(ARG_PASSWORD)
        .help("Password")
        .env("USERPORTAL_PASSWORD")
        .hide_env_values(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_SIGNUP)
                .about("Create an account")
                .arg(
                    Arg::new(ARG_USERNAME)
                        .long(ARG_USERNAME)
                        .help("Username, at least 4 characters"),
                )
                .arg(email_arg())
                .arg(password_arg())
                .arg(
                    Arg::new(ARG_CONFIRM_PASSWORD)
                        .long(ARG_CONFIRM_PASSWORD)
                        .help("Password confirmation")
                        .env("USERPORTAL_CONFIRM_PASSWORD")
                        .hide_env_values(true),
                ),
        )
        .subcommand(
            Command::new(CMD_CHECK_EMAIL)
                .about("Check whether an email address is still available")
                .arg(email_arg().required(true)),
        )
        .subcommand(
            Command::new(CMD_ACTIVATE)
                .about("Activate an account with the emailed token")
                .arg(Arg::new(ARG_TOKEN).help("Activation token").required(true)),
        )
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Log in and store the session")
                .arg(email_arg())
                .arg(password_arg()),
        )
        .subcommand(Command::new(CMD_LOGOUT).about("Clear the stored session"))
        .subcommand(Command::new(CMD_WHOAMI).about("Show the stored session"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn command() -> Command {
        with_subcommands(Command::new("userportal"))
    }

    #[test]
    fn signup_reads_flags_and_env_passwords() {
        temp_env::with_vars(
            [
                ("USERPORTAL_PASSWORD", Some("P4ssword")),
                ("USERPORTAL_CONFIRM_PASSWORD", Some("P4ssword")),
            ],
            || {
                let matches = command().get_matches_from(vec![
                    "userportal",
                    CMD_SIGNUP,
                    "--username",
                    "user1",
                    "--email",
                    "user1@mail.com",
                ]);
                let sub = matches.subcommand_matches(CMD_SIGNUP).unwrap();
                let options = SignUpOptions::parse(sub);
                assert_eq!(options.username, "user1");
                assert_eq!(options.email, "user1@mail.com");
                assert_eq!(options.password.expose_secret(), "P4ssword");
                assert_eq!(options.confirm_password.expose_secret(), "P4ssword");
            },
        );
    }

    #[test]
    fn missing_login_values_are_empty() {
        temp_env::with_vars([("USERPORTAL_PASSWORD", None::<&str>)], || {
            let matches = command().get_matches_from(vec!["userportal", CMD_LOGIN]);
            let sub = matches.subcommand_matches(CMD_LOGIN).unwrap();
            let options = LoginOptions::parse(sub);
            assert_eq!(options.email, "");
            assert_eq!(options.password.expose_secret(), "");
        });
    }

    #[test]
    fn activate_requires_token() {
        let result = command().try_get_matches_from(vec!["userportal", CMD_ACTIVATE]);
        assert!(result.is_err());
    }
}
