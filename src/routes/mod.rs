//! Route controllers. Each one owns the state of a single page, executes the
//! effects its reducer asks for and feeds the results back in.

pub mod activate;
pub mod login;
pub mod signup;
pub mod user;
pub mod users;

pub use activate::ActivationPage;
pub use login::LoginPage;
pub use signup::SignUpPage;
pub use user::UserProfilePage;
pub use users::UserListPage;

use tracing::info;

pub mod paths {
    pub const HOME: &str = "/";
    pub const SIGN_UP: &str = "/signup";
    pub const LOGIN: &str = "/login";

    #[must_use]
    pub fn activate(token: &str) -> String {
        format!("/activate/{token}")
    }

    #[must_use]
    pub fn user_detail(id: u64) -> String {
        format!("/user/{id}")
    }
}

/// Abstract "navigate to path" capability.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// Navigator for non-interactive front ends: logs and remembers each target.
#[derive(Debug, Default)]
pub struct HistoryNavigator {
    history: Vec<String>,
}

impl HistoryNavigator {
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }
}

impl Navigator for HistoryNavigator {
    fn navigate(&mut self, path: &str) {
        info!(path, "navigate");
        self.history.push(path.to_string());
    }
}
