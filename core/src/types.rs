//! Domain types for the todo service.
//!
//! # Design
//! `Todo` is the persisted record. `TodoInput` is what callers hand to the
//! service for both create and update: every field a client may send, with
//! `id` and `text` optional so the service can decide what to ignore, what to
//! reject and what to preserve. `done` defaults to `false` when the JSON omits
//! it, so an update that leaves it out clears a previously completed todo.

use serde::{Deserialize, Deserializer, Serialize};

/// A single todo item as stored and returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: String,
    pub text: String,
    pub done: bool,
}

/// Candidate todo for `create`, or patch for `update`.
///
/// `id` is accepted so bodies carrying one still deserialize, but the service
/// never persists it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub done: bool,
}

/// `null` and a missing key both read as `false`.
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TodoInput {
    pub fn new(text: impl Into<String>, done: bool) -> Self {
        Self {
            id: None,
            text: Some(text.into()),
            done,
        }
    }

    /// Same input, carrying a client-chosen id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: "123".to_string(),
            text: "Buy Milk".to_string(),
            done: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], "123");
        assert_eq!(json["text"], "Buy Milk");
        assert_eq!(json["done"], false);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn input_defaults_done_to_false() {
        let input: TodoInput = serde_json::from_str(r#"{"text":"No done field"}"#).unwrap();
        assert_eq!(input.text.as_deref(), Some("No done field"));
        assert!(!input.done);
    }

    #[test]
    fn input_treats_null_text_as_absent() {
        let input: TodoInput = serde_json::from_str(r#"{"text":null,"done":true}"#).unwrap();
        assert!(input.text.is_none());
        assert!(input.done);
    }

    #[test]
    fn input_treats_null_done_as_false() {
        let input: TodoInput = serde_json::from_str(r#"{"text":"a","done":null}"#).unwrap();
        assert_eq!(input.text.as_deref(), Some("a"));
        assert!(!input.done);
    }

    #[test]
    fn input_rejects_non_boolean_done() {
        let result: Result<TodoInput, _> = serde_json::from_str(r#"{"done":"yes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn input_accepts_empty_object() {
        let input: TodoInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, TodoInput::default());
    }

    #[test]
    fn input_keeps_client_id() {
        let input: TodoInput =
            serde_json::from_str(r#"{"id":"client-sent","text":"Buy bread"}"#).unwrap();
        assert_eq!(input.id.as_deref(), Some("client-sent"));
    }

    #[test]
    fn with_id_sets_id() {
        let input = TodoInput::new("Buy bread", false).with_id("456");
        assert_eq!(input.id.as_deref(), Some("456"));
        assert_eq!(input.text.as_deref(), Some("Buy bread"));
    }
}
