//! Runtime configuration for the API endpoint, request timeout, session file
//! and email check debounce. Values come from CLI flags or their environment
//! variables; nothing here is secret.

use std::{path::PathBuf, time::Duration};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_SESSION_FILE: &str = ".userportal-auth.json";
pub const DEFAULT_EMAIL_CHECK_DEBOUNCE_MS: u64 = 300;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
    pub timeout: Duration,
    pub session_file: PathBuf,
    pub email_check_debounce: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            email_check_debounce: Duration::from_millis(DEFAULT_EMAIL_CHECK_DEBOUNCE_MS),
        }
    }
}

impl AppConfig {
    /// Returns a config pointing at `api_base_url`, keeping defaults otherwise.
    /// Blank values fall back to the default base URL.
    #[must_use]
    pub fn with_api_base_url(mut self, api_base_url: &str) -> Self {
        if let Some(value) = normalize_base_url(api_base_url) {
            self.api_base_url = value;
        }
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_session_file(mut self, session_file: PathBuf) -> Self {
        self.session_file = session_file;
        self
    }

    #[must_use]
    pub fn with_email_check_debounce(mut self, debounce: Duration) -> Self {
        self.email_check_debounce = debounce;
        self
    }
}

fn normalize_base_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
