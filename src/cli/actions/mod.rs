pub mod account;
pub mod session;
pub mod users;

// Internal "interpreter" for `Action`; the match lives in `run` so this module
// stays small.
mod run;

use crate::{
    app_lib::AppConfig,
    cli::commands::account::{LoginOptions, SignUpOptions},
};

#[derive(Debug)]
pub enum Action {
    SignUp {
        config: AppConfig,
        options: SignUpOptions,
    },
    CheckEmail {
        config: AppConfig,
        email: String,
    },
    Activate {
        config: AppConfig,
        token: String,
    },
    Login {
        config: AppConfig,
        options: LoginOptions,
    },
    Logout {
        config: AppConfig,
    },
    WhoAmI {
        config: AppConfig,
    },
    Users {
        config: AppConfig,
        page: u32,
    },
    User {
        config: AppConfig,
        id: u64,
    },
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
