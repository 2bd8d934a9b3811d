use serde::{Deserialize, Serialize};

/// Users shown per page in the list view.
pub const PAGE_SIZE: u32 = 3;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPage {
    pub content: Vec<User>,
    pub page: u32,
    pub size: u32,
    pub total_pages: u32,
}

impl Default for UserPage {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            page: 0,
            size: PAGE_SIZE,
            total_pages: 0,
        }
    }
}

impl UserPage {
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.total_pages > self.page + 1
    }

    #[must_use]
    pub fn has_previous_page(&self) -> bool {
        self.page != 0
    }
}
