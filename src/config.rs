//! Service Configuration
//!
//! Where the remote todo service lives and how much of it the list shows.

/// Public demo API used when no override is compiled in
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of items the list page keeps from the initial fetch
pub const DEFAULT_LIST_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub base_url: String,
    pub list_limit: usize,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            list_limit: DEFAULT_LIST_LIMIT,
        }
    }

    /// Build-time config; `TODO_API_BASE_URL` overrides the base URL
    pub fn from_build_env() -> Self {
        Self::new(option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub fn todo_url(&self, id: i64) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
