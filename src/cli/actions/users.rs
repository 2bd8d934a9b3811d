use crate::{
    app_lib::{ApiClient, AppConfig},
    features::users::types::User,
    routes::{UserListPage, UserProfilePage, paths, user::ProfileStatus},
};
use anyhow::{Result, bail};

fn print_user(user: &User) {
    println!(
        "{}\t{}\t{}\t{}",
        user.id,
        user.username,
        user.email,
        paths::user_detail(user.id)
    );
}

/// # Errors
/// Returns an error if the page cannot be loaded.
pub async fn list(config: &AppConfig, page_number: u32) -> Result<()> {
    let mut list = UserListPage::new(ApiClient::new(config)?);
    list.load(page_number).await;

    if let Some(err) = list.error() {
        bail!("{err}");
    }

    let page = list.page();
    for user in &page.content {
        print_user(user);
    }
    println!("page {} of {}", page.page + 1, page.total_pages.max(1));
    if page.has_previous_page() {
        println!("previous: --page {}", page.page - 1);
    }
    if page.has_next_page() {
        println!("next: --page {}", page.page + 1);
    }
    Ok(())
}

/// # Errors
/// Returns an error if the user cannot be loaded.
pub async fn show(config: &AppConfig, id: u64) -> Result<()> {
    let mut profile = UserProfilePage::new(ApiClient::new(config)?);
    match profile.load(&id.to_string()).await {
        ProfileStatus::Success(user) => {
            print_user(user);
            if let Some(image) = &user.image {
                println!("image: {image}");
            }
            Ok(())
        }
        ProfileStatus::Failed(message) => bail!("{message}"),
        ProfileStatus::InProgress => bail!("user {id} is still loading"),
    }
}
