//! Where the collection lives.

use std::env;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3000";
pub const DEFAULT_RESOURCE_PATH: &str = "/api/todo";

/// Environment variable overriding [`StoreConfig::base_url`].
pub const BASE_URL_ENV: &str = "TODO_API_URL";
/// Environment variable overriding [`StoreConfig::resource_path`].
pub const RESOURCE_PATH_ENV: &str = "TODO_API_PATH";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    base_url: String,
    resource_path: String,
}

impl StoreConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            resource_path: DEFAULT_RESOURCE_PATH.to_string(),
        }
    }

    pub fn with_resource_path(mut self, path: &str) -> Self {
        let path = path.trim_end_matches('/');
        self.resource_path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        self
    }

    /// Read `TODO_API_URL` / `TODO_API_PATH`, falling back to the defaults.
    pub fn from_env() -> Self {
        let base_url = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let path = env::var(RESOURCE_PATH_ENV).unwrap_or_else(|_| DEFAULT_RESOURCE_PATH.to_string());
        Self::new(&base_url).with_resource_path(&path)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    /// Absolute URL of the collection endpoint.
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.resource_path)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
