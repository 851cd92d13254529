//! Todo Entity
//!
//! A single task entry as stored in the remote `todos` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Suggested categories offered by the UI. The data model accepts any label.
pub const CATEGORY_SUGGESTIONS: [&str; 5] = ["업무", "개인", "학습", "건강", "기타"];

/// Category preselected in the new-todo form
pub const DEFAULT_CATEGORY: &str = "업무";

/// Opaque identifier assigned by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(String);

impl TodoId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TodoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TodoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Highest first, the order used by the stats panel
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "낮음",
            Priority::Medium => "보통",
            Priority::High => "높음",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored todo record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default = "default_category")]
    pub category: String,
    /// Owner column of the remote table; carried through untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

impl Todo {
    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// Insert payload. The store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub title: String,
    pub priority: Priority,
    pub category: String,
    pub completed: bool,
}

impl NewTodo {
    /// Build an insert payload, or `None` if the title is blank after trimming
    pub fn new(title: &str, priority: Priority, category: impl Into<String>) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }
        Some(Self {
            title: title.to_string(),
            priority,
            category: category.into(),
            completed: false,
        })
    }
}

/// Partial update sent with update-by-id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TodoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TodoPatch {
    pub fn completed(completed: bool) -> Self {
        Self { completed: Some(completed), ..Default::default() }
    }

    pub fn priority(priority: Priority) -> Self {
        Self { priority: Some(priority), ..Default::default() }
    }

    pub fn is_empty(&self) -> bool {
        self.completed.is_none() && self.priority.is_none()
    }

    pub fn apply_to(&self, todo: &mut Todo) {
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
        if let Some(priority) = self.priority {
            todo.priority = priority;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_todo_trims_title() {
        let draft = NewTodo::new("  Buy milk \n", Priority::High, "개인").unwrap();
        assert_eq!(draft.title, "Buy milk");
        assert_eq!(draft.priority, Priority::High);
        assert_eq!(draft.category, "개인");
        assert!(!draft.completed);
    }

    #[test]
    fn test_new_todo_rejects_blank() {
        assert!(NewTodo::new("", Priority::Low, "기타").is_none());
        assert!(NewTodo::new(" \t\n ", Priority::Low, "기타").is_none());
    }

    #[test]
    fn test_priority_round_trip() {
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("urgent"), None);
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        assert_eq!(Priority::default(), Priority::Medium);
        assert_eq!(Priority::Low.label(), "낮음");
    }

    #[test]
    fn test_todo_deserializes_remote_row() {
        let row = r#"{
            "id": "5b8f0f0e-1c1a-4c57-9d7e-2f0d9f1c8a11",
            "title": "Write report",
            "completed": false,
            "created_at": "2025-07-06T12:34:56.123456+00:00",
            "user_id": null,
            "priority": "high",
            "category": "업무"
        }"#;
        let todo: Todo = serde_json::from_str(row).unwrap();
        assert_eq!(todo.id.as_str(), "5b8f0f0e-1c1a-4c57-9d7e-2f0d9f1c8a11");
        assert_eq!(todo.priority, Priority::High);
        assert_eq!(todo.user_id, None);
        assert_eq!(todo.created_at.to_rfc3339(), "2025-07-06T12:34:56.123456+00:00");
    }

    #[test]
    fn test_todo_defaults_missing_columns() {
        let row = r#"{"id":"1","title":"t","completed":true,"created_at":"2025-01-01T00:00:00Z"}"#;
        let todo: Todo = serde_json::from_str(row).unwrap();
        assert_eq!(todo.priority, Priority::Medium);
        assert_eq!(todo.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let json = serde_json::to_string(&TodoPatch::completed(true)).unwrap();
        assert_eq!(json, r#"{"completed":true}"#);
        let json = serde_json::to_string(&TodoPatch::priority(Priority::Low)).unwrap();
        assert_eq!(json, r#"{"priority":"low"}"#);
        assert!(TodoPatch::default().is_empty());
    }
}
