//! Task domain model.
//!
//! # Responsibility
//! - Define the `Task` record and its JSON wire fields.
//! - Derive the next id for an append.
//! - Validate persisted lists before they become store state.
//!
//! # Invariants
//! - Next id is `last.id + 1`, or `1` for an empty list.
//! - A valid list has positive, pairwise distinct ids. Order is not
//!   checked; lists written by the store happen to be ascending.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Identifier of one task inside the current list.
pub type TaskId = u64;

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub complete: bool,
}

impl Task {
    /// Creates an incomplete task.
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }
}

/// Validation error for a persisted or derived task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Ids start at 1.
    ZeroId,
    /// Two tasks share one id.
    DuplicateId(TaskId),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroId => write!(f, "task id must be positive"),
            Self::DuplicateId(id) => write!(f, "task id {id} appears more than once"),
        }
    }
}

impl Error for TaskValidationError {}

/// Returns the fixed list used when nothing usable is persisted.
pub fn seed_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Buy groceries"),
        Task::new(2, "Code four hours today"),
    ]
}

/// Derives the id for a task appended to `tasks`.
///
/// This looks at the last element only, not at a running counter, so
/// deleting the last task and adding again hands out the same id.
/// Returns `None` when the id space is exhausted.
pub fn next_task_id(tasks: &[Task]) -> Option<TaskId> {
    match tasks.last() {
        Some(last) => last.id.checked_add(1),
        None => Some(1),
    }
}

/// Checks list-level invariants.
pub fn validate_task_list(tasks: &[Task]) -> Result<(), TaskValidationError> {
    let mut seen = HashSet::with_capacity(tasks.len());
    for task in tasks {
        if task.id == 0 {
            return Err(TaskValidationError::ZeroId);
        }
        if !seen.insert(task.id) {
            return Err(TaskValidationError::DuplicateId(task.id));
        }
    }
    Ok(())
}

/// Serializes a list into its stored JSON form.
pub fn encode_task_list(tasks: &[Task]) -> Result<String, serde_json::Error> {
    serde_json::to_string(tasks)
}

/// Parses a stored JSON value.
///
/// Returns `Ok(None)` for a stored `null`, which counts as absent. An empty
/// array is a real, empty list.
pub fn decode_task_list(raw: &str) -> Result<Option<Vec<Task>>, serde_json::Error> {
    serde_json::from_str::<Option<Vec<Task>>>(raw)
}

#[cfg(test)]
mod tests {
    use super::{
        decode_task_list, encode_task_list, next_task_id, seed_tasks, validate_task_list, Task,
        TaskValidationError,
    };

    #[test]
    fn next_id_follows_last_element() {
        assert_eq!(next_task_id(&[]), Some(1));
        assert_eq!(next_task_id(&seed_tasks()), Some(3));
        assert_eq!(
            next_task_id(&[Task::new(4, "a"), Task::new(9, "b")]),
            Some(10)
        );
    }

    #[test]
    fn next_id_reports_overflow() {
        assert_eq!(next_task_id(&[Task::new(u64::MAX, "last")]), None);
    }

    #[test]
    fn validate_rejects_zero_and_duplicate_ids() {
        assert_eq!(
            validate_task_list(&[Task::new(0, "zero")]),
            Err(TaskValidationError::ZeroId)
        );
        assert_eq!(
            validate_task_list(&[Task::new(2, "a"), Task::new(5, "b"), Task::new(2, "c")]),
            Err(TaskValidationError::DuplicateId(2))
        );
    }

    #[test]
    fn validate_accepts_unordered_distinct_ids() {
        assert!(validate_task_list(&[Task::new(5, "a"), Task::new(2, "b")]).is_ok());
        assert!(validate_task_list(&[]).is_ok());
    }

    #[test]
    fn wire_format_uses_plain_field_names() {
        let encoded = encode_task_list(&[Task::new(1, "Buy groceries")]).unwrap();
        assert_eq!(
            encoded,
            r#"[{"id":1,"text":"Buy groceries","complete":false}]"#
        );
    }

    #[test]
    fn decode_treats_null_as_absent_and_keeps_empty_list() {
        assert_eq!(decode_task_list("null").unwrap(), None);
        assert_eq!(decode_task_list("[]").unwrap(), Some(Vec::new()));
        assert!(decode_task_list("{not json").is_err());
        assert!(decode_task_list(r#"[{"id":1}]"#).is_err());
    }
}
