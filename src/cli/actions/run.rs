use crate::cli::actions::{Action, account, session, users};
use anyhow::Result;

/// Execute the provided action.
// Single dispatch point: every `Action::*` variant maps to one handler here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::SignUp { config, options } => account::sign_up(&config, options).await,
        Action::CheckEmail { config, email } => account::check_email(&config, email).await,
        Action::Activate { config, token } => account::activate(&config, &token).await,
        Action::Login { config, options } => session::login(&config, options).await,
        Action::Logout { config } => session::logout(&config).await,
        Action::WhoAmI { config } => {
            session::whoami(&config);
            Ok(())
        }
        Action::Users { config, page } => users::list(&config, page).await,
        Action::User { config, id } => users::show(&config, id).await,
    }
}
