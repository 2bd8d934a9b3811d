//! Arguments shared by every subcommand: where the API lives and how the client
//! behaves.

use crate::app_lib::{
    AppConfig,
    config::{
        DEFAULT_API_BASE_URL, DEFAULT_EMAIL_CHECK_DEBOUNCE_MS, DEFAULT_SESSION_FILE,
        DEFAULT_TIMEOUT_SECONDS,
    },
};
use clap::{Arg, ArgMatches, Command};
use std::{path::PathBuf, time::Duration};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT: &str = "timeout";
pub const ARG_SESSION_FILE: &str = "session-file";
pub const ARG_EMAIL_CHECK_DEBOUNCE: &str = "email-check-debounce";

#[derive(Debug, Clone)]
pub struct Options {
    pub api_url: String,
    pub timeout_seconds: u64,
    pub session_file: PathBuf,
    pub email_check_debounce_ms: u64,
}

impl Options {
    /// Parse API client arguments from matches.
    ///
    /// # Errors
    /// Returns an error if the API URL is blank or the timeout is zero.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let api_url = match matches.get_one::<String>(ARG_API_URL) {
            Some(value) if !value.trim().is_empty() => value.clone(),
            _ => anyhow::bail!("missing required argument: --{ARG_API_URL}"),
        };

        let timeout_seconds = matches
            .get_one::<u64>(ARG_TIMEOUT)
            .copied()
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        if timeout_seconds == 0 {
            anyhow::bail!("--{ARG_TIMEOUT} must be greater than zero");
        }

        Ok(Self {
            api_url,
            timeout_seconds,
            session_file: matches
                .get_one::<String>(ARG_SESSION_FILE)
                .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from),
            email_check_debounce_ms: matches
                .get_one::<u64>(ARG_EMAIL_CHECK_DEBOUNCE)
                .copied()
                .unwrap_or(DEFAULT_EMAIL_CHECK_DEBOUNCE_MS),
        })
    }

    #[must_use]
    pub fn to_config(&self) -> AppConfig {
        AppConfig::default()
            .with_api_base_url(&self.api_url)
            .with_timeout(Duration::from_secs(self.timeout_seconds))
            .with_session_file(self.session_file.clone())
            .with_email_check_debounce(Duration::from_millis(self.email_check_debounce_ms))
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Base URL of the user service API")
                .env("USERPORTAL_API_URL")
                .default_value(DEFAULT_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Request timeout in seconds")
                .env("USERPORTAL_TIMEOUT")
                .default_value("10")
                .value_parser(clap::value_parser!(u64))
                .global(true),
        )
        .arg(
            Arg::new(ARG_SESSION_FILE)
                .long(ARG_SESSION_FILE)
                .help("File holding the logged-in session")
                .env("USERPORTAL_SESSION_FILE")
                .default_value(DEFAULT_SESSION_FILE)
                .global(true),
        )
        .arg(
            Arg::new(ARG_EMAIL_CHECK_DEBOUNCE)
                .long(ARG_EMAIL_CHECK_DEBOUNCE)
                .help("Milliseconds to wait after the last email change before checking availability")
                .env("USERPORTAL_EMAIL_CHECK_DEBOUNCE_MS")
                .default_value("300")
                .value_parser(clap::value_parser!(u64))
                .global(true),
        )
}
