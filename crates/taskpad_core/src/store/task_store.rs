//! Task store: mutation, persistence and change notification.
//!
//! # Responsibility
//! - Load the initial list from the key-value store, falling back to seed data.
//! - Apply add/edit/delete/toggle by deriving a new list from the old one.
//! - Persist the full list under `TASKS_KEY`, then notify the observer.
//!
//! # Invariants
//! - A derived list becomes state only after it was written successfully.
//! - Every successful mutation performs exactly one write and one notification,
//!   including edits/deletes/toggles whose id matches nothing.
//! - At most one observer is registered; registering again replaces it.

use crate::kv::{KeyValueStore, KvError, TASKS_KEY};
use crate::model::task::{
    decode_task_list, encode_task_list, next_task_id, seed_tasks, validate_task_list, Task, TaskId,
};
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure of a store mutation. State is unchanged when one is returned.
#[derive(Debug)]
pub enum StoreError {
    /// The new list could not be encoded.
    Encode(serde_json::Error),
    /// The key-value backend rejected the write.
    Persist(KvError),
    /// `last id + 1` does not fit in `TaskId`.
    IdExhausted,
    /// `last id + 1` is already held by an earlier task.
    IdCollision(TaskId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Encode(err) => write!(f, "failed to encode task list: {err}"),
            Self::Persist(err) => write!(f, "failed to persist task list: {err}"),
            Self::IdExhausted => write!(f, "no task id left after {}", TaskId::MAX),
            Self::IdCollision(id) => write!(f, "next task id {id} is already in use"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Encode(err) => Some(err),
            Self::Persist(err) => Some(err),
            Self::IdExhausted | Self::IdCollision(_) => None,
        }
    }
}

impl From<KvError> for StoreError {
    fn from(value: KvError) -> Self {
        Self::Persist(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Where the initial list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded and validated from the persisted value.
    Persisted,
    /// Nothing stored (or a stored `null`); seed used.
    SeedMissing,
    /// Stored value did not decode or failed validation; seed used.
    SeedMalformed,
    /// The backend failed to read; seed used.
    SeedUnreadable,
}

impl LoadSource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Persisted => "persisted",
            Self::SeedMissing => "seed_missing",
            Self::SeedMalformed => "seed_malformed",
            Self::SeedUnreadable => "seed_unreadable",
        }
    }
}

type Observer = Box<dyn FnMut(&[Task])>;

/// Owner of the task list.
pub struct TaskStore<S: KeyValueStore> {
    kv: S,
    tasks: Vec<Task>,
    source: LoadSource,
    observer: Option<Observer>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Builds a store from whatever `kv` holds under `TASKS_KEY`.
    ///
    /// Never fails: unreadable, malformed or invalid data is replaced by
    /// `seed_tasks()` and only logged.
    pub fn load(kv: S) -> Self {
        let (tasks, source) = match kv.get(TASKS_KEY) {
            Ok(Some(raw)) => match decode_task_list(&raw) {
                Ok(Some(tasks)) => match validate_task_list(&tasks) {
                    Ok(()) => (tasks, LoadSource::Persisted),
                    Err(err) => {
                        warn!("event=store_load module=store status=fallback reason=invalid error={err}");
                        (seed_tasks(), LoadSource::SeedMalformed)
                    }
                },
                Ok(None) => (seed_tasks(), LoadSource::SeedMissing),
                Err(err) => {
                    warn!("event=store_load module=store status=fallback reason=malformed error={err}");
                    (seed_tasks(), LoadSource::SeedMalformed)
                }
            },
            Ok(None) => (seed_tasks(), LoadSource::SeedMissing),
            Err(err) => {
                warn!("event=store_load module=store status=fallback reason=unreadable error={err}");
                (seed_tasks(), LoadSource::SeedUnreadable)
            }
        };

        info!(
            "event=store_load module=store status=ok source={} count={}",
            source.as_str(),
            tasks.len()
        );

        Self {
            kv,
            tasks,
            source,
            observer: None,
        }
    }

    /// Current list in render order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn load_source(&self) -> LoadSource {
        self.source
    }

    pub fn kv(&self) -> &S {
        &self.kv
    }

    pub fn into_kv(self) -> S {
        self.kv
    }

    /// Registers the change observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: impl FnMut(&[Task]) + 'static) {
        if self.observer.is_some() {
            debug!("event=observer_replace module=store status=ok");
        }
        self.observer = Some(Box::new(observer));
    }

    /// Appends a task with the next derived id.
    ///
    /// Empty `text` is ignored without a write or notification. When the
    /// derived id is already taken (possible for a loaded list that is not
    /// in ascending id order) nothing is written and `IdCollision` is returned.
    pub fn add_task(&mut self, text: &str) -> StoreResult<()> {
        if text.is_empty() {
            debug!("event=task_add module=store status=skipped reason=empty_text");
            return Ok(());
        }
        let id = next_task_id(&self.tasks).ok_or(StoreError::IdExhausted)?;
        if self.tasks.iter().any(|task| task.id == id) {
            warn!("event=task_add module=store status=error error_code=id_collision id={id}");
            return Err(StoreError::IdCollision(id));
        }

        let mut next = self.tasks.clone();
        next.push(Task::new(id, text));
        self.commit("task_add", next)
    }

    /// Replaces the text of the task with `id`; other fields are kept.
    pub fn edit_task(&mut self, id: TaskId, new_text: &str) -> StoreResult<()> {
        let next = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    Task {
                        text: new_text.to_string(),
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();
        self.commit("task_edit", next)
    }

    /// Removes every task with `id`.
    pub fn delete_task(&mut self, id: TaskId) -> StoreResult<()> {
        let next = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        self.commit("task_delete", next)
    }

    /// Flips `complete` on the task with `id`.
    pub fn toggle_task(&mut self, id: TaskId) -> StoreResult<()> {
        let next = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    Task {
                        complete: !task.complete,
                        ..task.clone()
                    }
                } else {
                    task.clone()
                }
            })
            .collect();
        self.commit("task_toggle", next)
    }

    fn commit(&mut self, event: &str, next: Vec<Task>) -> StoreResult<()> {
        let encoded = encode_task_list(&next)?;
        if let Err(err) = self.kv.set(TASKS_KEY, &encoded) {
            error!("event={event} module=store status=error error_code=persist_failed error={err}");
            return Err(err.into());
        }

        self.tasks = next;
        debug!(
            "event={event} module=store status=ok count={}",
            self.tasks.len()
        );

        if let Some(observer) = self.observer.as_mut() {
            observer(&self.tasks);
        }
        Ok(())
    }
}
