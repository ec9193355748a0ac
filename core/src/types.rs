//! Domain DTOs for the todo service.
//!
//! # Design
//! Every type serializes in camelCase so the wire names (`isDone`,
//! `createdAt`) match what existing clients send and expect. Input structs
//! default every field: an absent field becomes an empty string or `false`
//! instead of an undefined value, and no presence check is made.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single todo record held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: u64,
    #[serde(default)]
    pub emoji: String,
    pub todo: String,
    pub priority: String,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /todos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTodo {
    pub todo: String,
    pub priority: String,
    pub is_done: bool,
    pub emoji: String,
}

/// Body of `PUT /todos/{id}`. This is a full replace: omitted fields are
/// reset to their defaults on the stored item, and `emoji` is always
/// cleared.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReplaceTodo {
    pub todo: String,
    pub priority: String,
    pub is_done: bool,
}

/// Body of `PATCH /todos/{id}/status`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateStatus {
    pub is_done: bool,
}

/// Query string of `GET /todos/search`. A missing or empty criterion
/// matches every item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
}

impl SearchQuery {
    pub fn new(todo: impl Into<String>, priority: impl Into<String>) -> Self {
        Self {
            todo: Some(todo.into()),
            priority: Some(priority.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_item_uses_camel_case_on_the_wire() {
        let item = TodoItem {
            id: 7,
            emoji: "☕".to_string(),
            todo: "Coffee".to_string(),
            priority: "low".to_string(),
            is_done: true,
            created_at: "2025-08-22T08:15:00Z".parse().unwrap(),
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["isDone"], true);
        assert_eq!(json["createdAt"], "2025-08-22T08:15:00Z");
        assert!(json.get("is_done").is_none());
    }

    #[test]
    fn create_todo_defaults_missing_fields() {
        let input: CreateTodo = serde_json::from_str(r#"{"todo":"Read"}"#).unwrap();
        assert_eq!(input.todo, "Read");
        assert_eq!(input.priority, "");
        assert_eq!(input.emoji, "");
        assert!(!input.is_done);
    }

    #[test]
    fn create_todo_accepts_every_field() {
        let input: CreateTodo = serde_json::from_str(
            r#"{"todo":"Run","priority":"high","isDone":true,"emoji":"🏃"}"#,
        )
        .unwrap();
        assert_eq!(input.priority, "high");
        assert!(input.is_done);
        assert_eq!(input.emoji, "🏃");
    }

    #[test]
    fn update_status_accepts_empty_body() {
        let input: UpdateStatus = serde_json::from_str("{}").unwrap();
        assert!(!input.is_done);
    }

    #[test]
    fn search_query_fields_are_optional() {
        let query: SearchQuery = serde_json::from_str(r#"{"priority":"low"}"#).unwrap();
        assert!(query.todo.is_none());
        assert_eq!(query.priority.as_deref(), Some("low"));
    }
}
