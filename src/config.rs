//! Client Configuration
//!
//! Where the todo service lives. Read at startup from
//! `<meta name="todo-config" content='{"api_base": ...}'>` when the page has
//! one, otherwise baked in at build time through `TODO_API_BASE`.

use serde::Deserialize;

use crate::models::TodoId;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

pub const CONFIG_META_NAME: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawClientConfig")]
pub struct ClientConfig {
    pub api_base: String,
}

/// Wire shape; normalized through `ClientConfig::with_base`
#[derive(Deserialize)]
struct RawClientConfig {
    api_base: String,
}

impl From<RawClientConfig> for ClientConfig {
    fn from(raw: RawClientConfig) -> Self {
        Self::with_base(raw.api_base.trim())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base(DEFAULT_API_BASE)
    }
}

impl ClientConfig {
    pub fn with_base(api_base: &str) -> Self {
        Self {
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Read `TODO_API_BASE` captured at compile time
    pub fn from_env() -> Self {
        match option_env!("TODO_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::with_base(base.trim()),
            _ => Self::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Page `<meta>` config if present and valid, else `from_env`
    pub fn load() -> Self {
        match read_meta_config() {
            Some(json) => Self::from_json(&json).unwrap_or_else(|e| {
                log::warn!("ignoring invalid {} meta: {}", CONFIG_META_NAME, e);
                Self::from_env()
            }),
            None => Self::from_env(),
        }
    }

    pub fn todos_url(&self) -> String {
        format!("{}/todos/", self.api_base)
    }

    pub fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{}", self.api_base, id)
    }

    pub fn summary_url(&self) -> String {
        format!("{}/todos/summary", self.api_base)
    }
}

#[cfg(target_arch = "wasm32")]
fn read_meta_config() -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", CONFIG_META_NAME);
    web_sys::window()?
        .document()?
        .query_selector(&selector)
        .ok()??
        .get_attribute("content")
}

#[cfg(not(target_arch = "wasm32"))]
fn read_meta_config() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls() {
        let config = ClientConfig::default();
        assert_eq!(config.todos_url(), "http://localhost:8000/todos/");
        assert_eq!(config.todo_url(7), "http://localhost:8000/todos/7");
        assert_eq!(config.summary_url(), "http://localhost:8000/todos/summary");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::with_base("https://api.example.com//");
        assert_eq!(config.todos_url(), "https://api.example.com/todos/");
    }

    #[test]
    fn test_deserialize() {
        let config = ClientConfig::from_json(r#"{"api_base":"http://x"}"#).unwrap();
        assert_eq!(config.todo_url(1), "http://x/todos/1");
    }

    #[test]
    fn test_deserialize_trims_trailing_slash() {
        let config = ClientConfig::from_json(r#"{"api_base":"http://x/"}"#).unwrap();
        assert_eq!(config, ClientConfig::with_base("http://x"));
        assert_eq!(config.todos_url(), "http://x/todos/");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ClientConfig::from_json(r#"{"base":"http://x"}"#).is_err());
    }

    #[test]
    fn test_load_falls_back_off_browser() {
        assert_eq!(ClientConfig::load(), ClientConfig::from_env());
    }
}
