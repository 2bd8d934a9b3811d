//! User profile route.

use crate::{
    app_lib::{ApiClient, AppError},
    features::users::{client, types::User},
    forms::submission::GENERIC_ERROR,
};
use tracing::warn;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ProfileStatus {
    #[default]
    InProgress,
    Success(User),
    Failed(String),
}

#[derive(Debug)]
pub struct UserProfilePage {
    api: ApiClient,
    status: ProfileStatus,
}

impl UserProfilePage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            status: ProfileStatus::InProgress,
        }
    }

    pub async fn load(&mut self, id: &str) -> &ProfileStatus {
        self.status = ProfileStatus::InProgress;
        self.status = match client::get_user(&self.api, id).await {
            Ok(user) => ProfileStatus::Success(user),
            Err(err) => {
                warn!(id, "failed to load user: {err}");
                ProfileStatus::Failed(failure_message(&err))
            }
        };
        &self.status
    }

    #[must_use]
    pub fn status(&self) -> &ProfileStatus {
        &self.status
    }

    #[must_use]
    pub fn show_spinner(&self) -> bool {
        self.status == ProfileStatus::InProgress
    }
}

fn failure_message(err: &AppError) -> String {
    match (err.status(), err.server_message()) {
        (Some(404), Some(message)) => message,
        _ => GENERIC_ERROR.to_string(),
    }
}
