//! Frontend Models
//!
//! Data structures matching the remote todo service.

use serde::{Deserialize, Serialize};

/// Server-assigned todo identifier
pub type TodoId = u32;

/// A todo record as returned by the server
///
/// Only records the server has confirmed exist as `TodoRecord`; a record that
/// has not been created yet is a [`NewTodo`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    /// Opaque, server-owned
    #[serde(default)]
    pub due_date: Option<String>,
    /// Opaque, server-owned
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TodoRecord {
    /// Description for display (`None` renders as empty)
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Creation request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            completed: false,
        }
    }
}

/// Client-side title rule shared by the creation form and edit save
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decodes_server_shape() {
        let json = r#"{
            "id": 1,
            "title": "Test Todo 1",
            "description": "Test Description 1",
            "completed": false,
            "created_at": "2023-01-01T00:00:00Z",
            "due_date": "2023-12-31T23:59:59Z"
        }"#;
        let record: TodoRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.description_text(), "Test Description 1");
        assert_eq!(record.due_date.as_deref(), Some("2023-12-31T23:59:59Z"));
    }

    #[test]
    fn test_record_tolerates_missing_optional_fields() {
        let record: TodoRecord = serde_json::from_str(r#"{"id":2,"title":"B","completed":true}"#).unwrap();
        assert!(record.completed);
        assert_eq!(record.description, None);
        assert_eq!(record.description_text(), "");
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_new_todo_is_not_completed() {
        let body = serde_json::to_value(NewTodo::new("X", "")).unwrap();
        assert_eq!(body, serde_json::json!({"title": "X", "description": "", "completed": false}));
    }

    #[test]
    fn test_title_rule() {
        assert!(is_valid_title("X"));
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("   "));
    }
}
