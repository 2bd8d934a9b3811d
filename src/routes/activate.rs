//! Account activation route.

use crate::{
    app_lib::{AppError, ApiClient},
    features::auth::client,
};
use tracing::{info, warn};

pub const ACTIVATION_SUCCESS: &str = "Account is activated";
pub const ACTIVATION_FAILURE: &str = "Activation failure";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActivationStatus {
    #[default]
    Idle,
    InProgress,
    Success,
    Failed,
}

#[derive(Debug)]
pub struct ActivationPage {
    api: ApiClient,
    token: Option<String>,
    status: ActivationStatus,
}

impl ActivationPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            token: None,
            status: ActivationStatus::Idle,
        }
    }

    /// Enters the route for `token` and resolves the activation.
    pub async fn activate(&mut self, token: &str) -> ActivationStatus {
        self.begin(token);
        let result = client::activate(&self.api, token).await;
        self.finish(result)
    }

    /// Starts a new activation; any previous outcome is discarded.
    pub fn begin(&mut self, token: &str) {
        self.token = Some(token.to_string());
        self.status = ActivationStatus::InProgress;
    }

    pub fn finish(&mut self, result: Result<(), AppError>) -> ActivationStatus {
        self.status = match result {
            Ok(()) => {
                info!("account activated");
                ActivationStatus::Success
            }
            Err(err) => {
                warn!("activation failed: {err}");
                ActivationStatus::Failed
            }
        };
        self.status
    }

    #[must_use]
    pub fn status(&self) -> ActivationStatus {
        self.status
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.status == ActivationStatus::InProgress
    }

    #[must_use]
    pub fn message(&self) -> Option<&'static str> {
        match self.status {
            ActivationStatus::Success => Some(ACTIVATION_SUCCESS),
            ActivationStatus::Failed => Some(ACTIVATION_FAILURE),
            ActivationStatus::Idle | ActivationStatus::InProgress => None,
        }
    }
}
