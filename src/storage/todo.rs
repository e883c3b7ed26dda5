use super::TodoId;
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[schema(value_type = String)]
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    /// Milliseconds since epoch; set only while `completed` is true.
    pub completed_at: Option<i64>,
}

/// Creation payload handed to the storage adapter, which assigns the id.
#[derive(Debug, Clone)]
pub struct NewTodo {
    pub text: String,
}

impl Todo {
    pub(crate) fn new(id: TodoId, new: NewTodo) -> Self {
        Self {
            id,
            text: new.text,
            completed: false,
            completed_at: None,
        }
    }

    pub(crate) fn apply(&mut self, patch: &TodoPatch) {
        if let Some(text) = &patch.text {
            if self.text != *text {
                self.text = text.clone();
            }
        }
        self.completed = patch.completed;
        self.completed_at = patch.completed_at;
    }
}

/// Normalized update. `completed` and `completed_at` are always written
/// together; `text` only when it was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPatch {
    pub text: Option<String>,
    pub completed: bool,
    pub completed_at: Option<i64>,
}

impl TodoPatch {
    /// Only a literal `true` completes the todo and stamps it with `now_ms`.
    /// Anything else, including a missing field, reopens it.
    pub(crate) fn normalize(text: Option<String>, completed: Option<&Value>, now_ms: i64) -> Self {
        let (completed, completed_at) = match completed {
            Some(Value::Bool(true)) => (true, Some(now_ms)),
            _ => (false, None),
        };

        Self {
            text,
            completed,
            completed_at,
        }
    }

    pub(crate) fn from_request(value: &crate::handlers::UpdateTodo, now_ms: i64) -> Self {
        Self::normalize(value.text.clone(), value.completed.as_ref(), now_ms)
    }
}

#[derive(Encode, Decode, Serialize, Deserialize, Debug)]
#[serde(tag = "version", content = "data")]
pub(crate) enum TodoVersion {
    V1 {
        id: TodoId,
        text: String,
        completed: bool,
        completed_at: Option<i64>,
    },
}

impl From<TodoVersion> for Todo {
    fn from(value: TodoVersion) -> Self {
        match value {
            TodoVersion::V1 {
                id,
                text,
                completed,
                completed_at,
            } => Self {
                id,
                text,
                completed,
                completed_at,
            },
        }
    }
}

impl From<Todo> for TodoVersion {
    fn from(value: Todo) -> Self {
        Self::V1 {
            id: value.id,
            text: value.text,
            completed: value.completed,
            completed_at: value.completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    const NOW: i64 = 1_700_000_000_000;

    fn stored(completed: bool) -> Todo {
        Todo {
            id: TodoId::new(),
            text: "Buy milk".to_string(),
            completed,
            completed_at: completed.then_some(NOW - 1),
        }
    }

    #[test]
    fn test_completed_true_stamps_time() {
        let patch = TodoPatch::normalize(None, Some(&json!(true)), NOW);

        assert!(patch.completed);
        assert_eq!(patch.completed_at, Some(NOW));
        assert_eq!(patch.text, None);
    }

    #[test]
    fn test_non_true_values_reopen() {
        for value in [
            json!(false),
            json!("true"),
            json!(1),
            json!(null),
            json!({}),
            json!([true]),
        ] {
            let patch = TodoPatch::normalize(None, Some(&value), NOW);
            assert!(!patch.completed, "{value} must not complete the todo");
            assert_eq!(patch.completed_at, None);
        }

        let patch = TodoPatch::normalize(None, None, NOW);
        assert!(!patch.completed);
        assert_eq!(patch.completed_at, None);
    }

    #[test]
    fn test_text_passes_through_unchanged() {
        let patch = TodoPatch::normalize(Some(String::new()), None, NOW);
        assert_eq!(patch.text.as_deref(), Some(""));

        let patch = TodoPatch::normalize(Some("  spaced  ".to_string()), None, NOW);
        assert_eq!(patch.text.as_deref(), Some("  spaced  "));
    }

    #[test]
    fn test_from_request_ignores_unknown_fields() {
        let request: crate::handlers::UpdateTodo = serde_json::from_value(json!({
            "text": "new",
            "completed": true,
            "completedAt": 42,
            "id": "ignored",
        }))
        .unwrap();

        let patch = TodoPatch::from_request(&request, NOW);

        assert_eq!(
            patch,
            TodoPatch {
                text: Some("new".to_string()),
                completed: true,
                completed_at: Some(NOW),
            }
        );
    }

    #[test]
    fn test_apply_keeps_text_when_absent() {
        let mut todo = stored(false);
        todo.apply(&TodoPatch::normalize(None, Some(&json!(true)), NOW));

        assert_eq!(todo.text, "Buy milk");
        assert!(todo.completed);
        assert_eq!(todo.completed_at, Some(NOW));
    }

    #[test]
    fn test_apply_reopen_clears_timestamp() {
        let mut todo = stored(true);
        todo.apply(&TodoPatch::normalize(
            Some("Buy oat milk".to_string()),
            Some(&json!(false)),
            NOW,
        ));

        assert_eq!(todo.text, "Buy oat milk");
        assert!(!todo.completed);
        assert_eq!(todo.completed_at, None);
    }

    #[test]
    fn test_repeated_patches() {
        let mut todo = stored(false);

        todo.apply(&TodoPatch::normalize(None, Some(&json!(false)), NOW));
        todo.apply(&TodoPatch::normalize(None, Some(&json!(false)), NOW + 10));
        assert!(!todo.completed);
        assert_eq!(todo.completed_at, None);

        todo.apply(&TodoPatch::normalize(None, Some(&json!(true)), NOW));
        todo.apply(&TodoPatch::normalize(None, Some(&json!(true)), NOW + 10));
        assert!(todo.completed);
        assert_eq!(todo.completed_at, Some(NOW + 10));
    }

    #[test]
    fn test_json_shape() {
        let todo = stored(true);
        let value = serde_json::to_value(&todo).unwrap();

        assert_eq!(
            value,
            json!({
                "id": todo.id.to_string(),
                "text": "Buy milk",
                "completed": true,
                "completedAt": NOW - 1,
            })
        );

        let value = serde_json::to_value(stored(false)).unwrap();
        assert!(value["completedAt"].is_null());
    }

    fn any_json() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            ".*".prop_map(Value::String),
        ]
    }

    proptest! {
        #[test]
        fn normalized_patch_keeps_invariant(
            text in proptest::option::of(".*"),
            completed in proptest::option::of(any_json()),
            now in 1..i64::MAX,
            was_completed in any::<bool>(),
        ) {
            let patch = TodoPatch::normalize(text.clone(), completed.as_ref(), now);
            prop_assert_eq!(patch.completed, patch.completed_at.is_some());
            prop_assert_eq!(patch.text, text);

            let mut todo = stored(was_completed);
            todo.apply(&TodoPatch::normalize(None, completed.as_ref(), now));
            prop_assert_eq!(todo.completed, todo.completed_at.is_some());
        }
    }
}
