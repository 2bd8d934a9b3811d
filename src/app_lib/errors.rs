use serde::Deserialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the user.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {}", sanitize_body(.body))]
    Http { status: u16, body: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ValidationBody {
    validation_errors: BTreeMap<String, String>,
}

impl AppError {
    /// HTTP status of a rejected request, `None` for transport and local failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The flat `{ "message": ... }` carried by an HTTP error body, if any.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        let Self::Http { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<MessageBody>(body)
            .ok()
            .map(|parsed| parsed.message)
            .filter(|message| !message.trim().is_empty())
    }

    /// Per-field messages from a `{ "validationErrors": { field: message } }` body.
    #[must_use]
    pub fn validation_errors(&self) -> Option<BTreeMap<String, String>> {
        let Self::Http { body, .. } = self else {
            return None;
        };
        serde_json::from_str::<ValidationBody>(body)
            .ok()
            .map(|parsed| parsed.validation_errors)
    }
}

/// Trims and truncates HTTP error bodies for user-facing messages.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
