//! Sign-up, availability and activation commands.

use crate::{
    app_lib::{ApiClient, AppConfig},
    cli::commands::account::SignUpOptions,
    forms::{Field, SignUpForm},
    routes::{
        ActivationPage, SignUpPage,
        activate::ActivationStatus,
        paths,
    },
};
use anyhow::{Result, bail};
use secrecy::ExposeSecret;
use tracing::info;

const SIGN_UP_FIELDS: [Field; 4] = [
    Field::Username,
    Field::Email,
    Field::Password,
    Field::ConfirmPassword,
];

/// Fills the sign-up form, waits for the availability check and submits.
///
/// # Errors
/// Returns an error if the form is invalid or the backend rejects it.
pub async fn sign_up(config: &AppConfig, options: SignUpOptions) -> Result<()> {
    let api = ApiClient::new(config)?;
    info!(route = paths::SIGN_UP, "opening sign-up form");

    let mut page = SignUpPage::new(api, config.email_check_debounce);
    page.input(Field::Username, options.username);
    page.input(Field::Email, options.email);
    page.input(Field::Password, options.password.expose_secret());
    page.input(
        Field::ConfirmPassword,
        options.confirm_password.expose_secret(),
    );
    page.run_until_idle().await;

    if !page.form().can_submit() {
        print_field_errors(page.form());
        bail!("sign-up form is invalid");
    }

    page.submit();
    page.run_until_idle().await;

    if let Some(message) = page.form().success_message() {
        println!("{message}");
        return Ok(());
    }

    print_field_errors(page.form());
    match page.form().banner() {
        Some(banner) => bail!("{banner}"),
        None => bail!("sign-up rejected"),
    }
}

/// Runs the debounced availability check for a single address.
///
/// # Errors
/// Returns an error if the address is invalid or already in use.
pub async fn check_email(config: &AppConfig, email: String) -> Result<()> {
    let api = ApiClient::new(config)?;
    let mut page = SignUpPage::new(api, config.email_check_debounce);
    page.input(Field::Email, email.clone());
    page.run_until_idle().await;

    if let Some(message) = page.form().field_error(Field::Email) {
        bail!("{message}");
    }

    println!("{} is available", email.trim());
    Ok(())
}

/// # Errors
/// Returns an error if the activation fails.
pub async fn activate(config: &AppConfig, token: &str) -> Result<()> {
    let api = ApiClient::new(config)?;
    info!(route = %paths::activate(token), "opening activation");

    let mut page = ActivationPage::new(api);
    let status = page.activate(token).await;
    let message = page.message().unwrap_or_default();

    if status == ActivationStatus::Success {
        println!("{message}");
        Ok(())
    } else {
        bail!("{message}")
    }
}

fn print_field_errors(form: &SignUpForm) {
    for field in SIGN_UP_FIELDS {
        if let Some(message) = form.field_error(field) {
            eprintln!("{}: {message}", field.label());
        }
    }
}
