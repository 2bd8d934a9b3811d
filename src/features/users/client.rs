//! Client helpers for user endpoints. Paths stay centralized here; the backend
//! enforces authorization.

use crate::{
    app_lib::{ApiClient, AppError, path_segment},
    features::users::types::{PAGE_SIZE, User, UserPage},
};

/// Fetches one page of users.
pub async fn list_users(api: &ApiClient, page: u32) -> Result<UserPage, AppError> {
    api.get_json(
        "/api/1.0/users",
        &[("page", page.to_string()), ("size", PAGE_SIZE.to_string())],
    )
    .await
}

/// Fetches user details by id after basic input validation.
pub async fn get_user(api: &ApiClient, id: &str) -> Result<User, AppError> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        return Err(AppError::Config("User id is required.".to_string()));
    }

    let id = path_segment(trimmed)?;
    api.get_json(&format!("/api/1.0/users/{id}"), &[]).await
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

    #[tokio::test]
    async fn list_users_sends_page_and_size() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1.0/users"))
            .and(query_param("page", "1"))
            .and(query_param("size", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [],
                "page": 1,
                "size": 3,
                "totalPages": 2
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&AppConfig::default().with_api_base_url(&server.uri())).unwrap();
        let page = list_users(&api, 1).await.unwrap();
        assert_eq!(page.page, 1);
        assert!(!page.has_next_page());
    }

    #[tokio::test]
    async fn get_user_requires_id() {
        let api = ApiClient::new(&AppConfig::default()).unwrap();
        assert!(matches!(get_user(&api, " ").await, Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn get_user_keeps_id_in_one_segment() {
        if !can_bind_localhost() {
            eprintln!("Skipping test: cannot bind localhost");
            return;
        }
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1.0/users/1%2Fadmin"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let api = ApiClient::new(&AppConfig::default().with_api_base_url(&server.uri())).unwrap();
        assert_eq!(get_user(&api, "1/admin").await.unwrap_err().status(), Some(404));
    }
}
