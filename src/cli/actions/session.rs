//! Login, logout and session inspection backed by the session file.

use crate::{
    app_lib::{ApiClient, AppConfig},
    cli::commands::account::LoginOptions,
    features::auth::{session::FileSessionStore, state::AuthContext},
    forms::Field,
    routes::{HistoryNavigator, LoginPage, Navigator, paths},
};
use anyhow::{Result, bail};
use secrecy::ExposeSecret;
use tracing::debug;

fn restore(config: &AppConfig) -> AuthContext<FileSessionStore> {
    AuthContext::restore(FileSessionStore::new(config.session_file.clone()))
}

/// # Errors
/// Returns an error if the credentials are incomplete or rejected.
pub async fn login(config: &AppConfig, options: LoginOptions) -> Result<()> {
    let api = ApiClient::new(config)?;
    let mut auth = restore(config);
    let mut navigator = HistoryNavigator::default();
    navigator.navigate(paths::LOGIN);

    let mut page = LoginPage::new(api, &mut auth, &mut navigator);
    page.input(Field::Email, options.email);
    page.input(Field::Password, options.password.expose_secret());

    if !page.form().can_submit() {
        for field in [Field::Email, Field::Password] {
            if let Some(message) = page.form().field_error(field) {
                eprintln!("{}: {message}", field.label());
            }
        }
        bail!("login form is invalid");
    }

    page.submit();
    page.run_until_idle().await;

    if let Some(banner) = page.form().banner() {
        bail!("{banner}");
    }
    drop(page);

    debug!(route = navigator.current(), "login finished");
    let session = auth.session();
    println!("Logged in as {} <{}>", session.username, session.email);
    Ok(())
}

/// # Errors
/// Returns an error if the stored session cannot be removed.
pub async fn logout(config: &AppConfig) -> Result<()> {
    let mut auth = restore(config);
    if !auth.is_logged_in() {
        println!("Not logged in");
        return Ok(());
    }

    let api = ApiClient::new(config)?;
    auth.logout(&api).await?;
    println!("Logged out");
    Ok(())
}

pub fn whoami(config: &AppConfig) {
    let auth = restore(config);
    let session = auth.session();
    if session.is_logged_in {
        println!(
            "{} <{}> ({})",
            session.username,
            session.email,
            paths::user_detail(session.id)
        );
    } else {
        println!("Not logged in");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::forms::submission::GENERIC_ERROR;
    use secrecy::SecretString;
    use serde_json::json;
    use std::{fs, net::TcpListener};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    #[tokio::test]
    async fn login_fails_when_session_cannot_be_written() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/1.0/auth"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 1, "username": "user1", "email": "user1@mail.com"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let config = AppConfig::default()
            .with_api_base_url(&server.uri())
            .with_session_file(blocker.join("auth.json"));
        let options = LoginOptions {
            email: "user1@mail.com".into(),
            password: SecretString::from("P4ssword".to_string()),
        };

        let err = login(&config, options).await.unwrap_err();
        assert_eq!(err.to_string(), GENERIC_ERROR);
        assert!(!restore(&config).is_logged_in());
    }
}
