//! Paginated user list shown on the home route.

use crate::{
    app_lib::ApiClient,
    features::users::{client, types::UserPage},
    forms::submission::GENERIC_ERROR,
};
use tracing::{info, warn};

#[derive(Debug)]
pub struct UserListPage {
    api: ApiClient,
    page: UserPage,
    fetching: bool,
    error: Option<String>,
}

impl UserListPage {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            page: UserPage::default(),
            fetching: false,
            error: None,
        }
    }

    /// Loads `page_number`. On failure the current page stays on screen.
    pub async fn load(&mut self, page_number: u32) {
        self.fetching = true;
        self.error = None;

        match client::list_users(&self.api, page_number).await {
            Ok(page) => {
                info!(page = page.page, total_pages = page.total_pages, "user page loaded");
                self.page = page;
            }
            Err(err) => {
                warn!(page = page_number, "failed to load users: {err}");
                self.error = Some(GENERIC_ERROR.to_string());
            }
        }

        self.fetching = false;
    }

    /// Loads the following page. Returns `false` when there is none.
    pub async fn next(&mut self) -> bool {
        if !self.page.has_next_page() {
            return false;
        }
        self.load(self.page.page + 1).await;
        true
    }

    /// Loads the preceding page. Returns `false` on the first page.
    pub async fn previous(&mut self) -> bool {
        if !self.page.has_previous_page() {
            return false;
        }
        self.load(self.page.page - 1).await;
        true
    }

    #[must_use]
    pub fn page(&self) -> &UserPage {
        &self.page
    }

    #[must_use]
    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::app_lib::AppConfig;
    use serde_json::json;
    use std::net::TcpListener;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn can_bind_localhost() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn page_body(page: u32, names: &[&str]) -> serde_json::Value {
        let content: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                json!({ "id": idx + 1, "username": name, "email": format!("{name}@mail.com") })
            })
            .collect();
        json!({ "content": content, "page": page, "size": 3, "totalPages": 2 })
    }

    async fn mount_page(server: &MockServer, page: u32, status: u16, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/api/1.0/users"))
            .and(query_param("page", page.to_string()))
            .and(query_param("size", "3"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn paging_follows_total_pages() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_page(&server, 0, 200, page_body(0, &["user1", "user2", "user3"])).await;
        mount_page(&server, 1, 200, page_body(1, &["user4"])).await;

        let api = ApiClient::new(&AppConfig::default().with_api_base_url(&server.uri())).unwrap();
        let mut list = UserListPage::new(api);

        assert!(!list.previous().await);
        list.load(0).await;
        assert_eq!(list.page().content.len(), 3);
        assert!(!list.is_fetching());

        assert!(list.next().await);
        assert_eq!(list.page().page, 1);
        assert_eq!(list.page().content[0].username, "user4");
        assert!(!list.next().await);

        assert!(list.previous().await);
        assert_eq!(list.page().page, 0);
    }

    #[tokio::test]
    async fn failed_load_keeps_current_page() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        mount_page(&server, 0, 200, page_body(0, &["user1", "user2", "user3"])).await;
        mount_page(&server, 1, 500, json!({ "message": "boom" })).await;

        let api = ApiClient::new(&AppConfig::default().with_api_base_url(&server.uri())).unwrap();
        let mut list = UserListPage::new(api);
        list.load(0).await;
        assert!(list.next().await);

        assert_eq!(list.page().page, 0);
        assert_eq!(list.page().content.len(), 3);
        assert_eq!(list.error(), Some(GENERIC_ERROR));
        assert!(!list.is_fetching());
    }
}
