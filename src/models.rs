//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Task identifier as the backend hands it out (integer or string).
///
/// Equality and hashing go through the rendered text, so `42` from a
/// `data-todo-id` attribute matches `"42"` from a JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    Int(i64),
    Text(String),
}

impl TodoId {
    /// Parse a `data-todo-id` attribute value
    pub fn from_attr(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(n) => TodoId::Int(n),
            Err(_) => TodoId::Text(raw.to_string()),
        }
    }
}

impl PartialEq for TodoId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TodoId::Int(a), TodoId::Int(b)) => a == b,
            (TodoId::Text(a), TodoId::Text(b)) => a == b,
            _ => self.to_string() == other.to_string(),
        }
    }
}

impl Eq for TodoId {}

impl Hash for TodoId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Int(n) => write!(f, "{}", n),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Case-insensitive match against the server's label
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// Form value
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Option label in the edit form
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Subtask entry. Position in the parent's list is its only identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Subtask {
    pub fn pending(text: impl Into<String>) -> Self {
        Self { text: text.into(), completed: false }
    }
}

/// Task record returned by `/details`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoRecord {
    pub id: TodoId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Raw label, e.g. "High"
    pub priority: String,
    #[serde(default)]
    pub completed: bool,
    /// Due date display label
    #[serde(default)]
    pub complete_time: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subtasks: Vec<Subtask>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Subtask>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Subtask>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `{success, error}` acknowledgement returned by every mutation endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl Ack {
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected(
                self.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_from_details_payload() {
        let json = r#"{
            "id": 7,
            "title": "Write report",
            "description": "<b>quarterly</b>",
            "completed": false,
            "complete_time": "17 October 2026",
            "created_at": null,
            "priority": "High",
            "subtasks": [{"text": "outline", "completed": true}, {"text": "draft", "completed": false}]
        }"#;
        let record: TodoRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, TodoId::Int(7));
        assert_eq!(record.complete_time.as_deref(), Some("17 October 2026"));
        assert_eq!(record.created_at, None);
        assert_eq!(record.subtasks.len(), 2);
        assert!(record.subtasks[0].completed);
    }

    #[test]
    fn test_record_tolerates_missing_and_null_subtasks() {
        let missing: TodoRecord =
            serde_json::from_str(r#"{"id": "a1", "title": "t", "priority": "low"}"#).unwrap();
        assert_eq!(missing.id, TodoId::Text("a1".into()));
        assert!(missing.subtasks.is_empty());

        let null: TodoRecord =
            serde_json::from_str(r#"{"id": 1, "title": "t", "priority": "low", "subtasks": null}"#).unwrap();
        assert!(null.subtasks.is_empty());
    }

    #[test]
    fn test_todo_id_from_attr() {
        assert_eq!(TodoId::from_attr("42"), TodoId::Int(42));
        assert_eq!(TodoId::from_attr(" 42 "), TodoId::Int(42));
        assert_eq!(TodoId::from_attr("abc-1"), TodoId::Text("abc-1".into()));
        assert_eq!(TodoId::Int(42).to_string(), "42");
    }

    #[test]
    fn test_todo_id_matches_across_number_and_string_forms() {
        use std::collections::HashSet;

        let from_page = TodoId::from_attr("42");
        let from_json: TodoId = serde_json::from_str(r#""42""#).unwrap();
        assert_eq!(from_json, TodoId::Text("42".into()));
        assert_eq!(from_page, from_json);
        assert_ne!(TodoId::Int(42), TodoId::Text("042".into()));
        assert_ne!(TodoId::Text("a".into()), TodoId::Text("A".into()));

        let set: HashSet<TodoId> = [from_page].into_iter().collect();
        assert!(set.contains(&from_json));
    }

    #[test]
    fn test_todo_id_serializes_bare() {
        assert_eq!(serde_json::to_string(&TodoId::Int(3)).unwrap(), "3");
        assert_eq!(serde_json::to_string(&TodoId::Text("x".into())).unwrap(), r#""x""#);
    }

    #[test]
    fn test_priority_parse_is_case_insensitive() {
        assert_eq!(Priority::parse("High"), Some(Priority::High));
        assert_eq!(Priority::parse("HIGH"), Some(Priority::High));
        assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_ack_into_result() {
        let ok: Ack = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert_eq!(ok.into_result(), Ok(()));

        let failed: Ack =
            serde_json::from_str(r#"{"success": false, "error": "Invalid subtask index"}"#).unwrap();
        assert_eq!(failed.into_result(), Err(ApiError::Rejected("Invalid subtask index".into())));

        let bare: Ack = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(bare.into_result(), Err(ApiError::Rejected("Unknown error".into())));
    }
}
