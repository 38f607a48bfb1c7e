//! Business rules layered over the task store.
//!
//! The service owns normalization (trimming, field defaulting) and filter
//! interpretation. It reports not-found as `None`/`false` sentinels; only
//! the API layer turns absence into HTTP status codes.

use std::sync::Arc;

use uuid::Uuid;

use crate::store::TaskStore;
use crate::task::{StatusFilter, Task};

/// A partial update naming only the fields to change.
///
/// Absent fields leave the stored value unchanged; the distinction between
/// "omit" and "set" is carried by the `Option`s, not by sentinel values.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub is_completed: Option<bool>,
}

impl TaskPatch {
    /// Whether the patch names no fields at all.
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.is_completed.is_none()
    }
}

/// Task business operations over a shared store.
#[derive(Clone)]
pub struct TaskService {
    store: Arc<TaskStore>,
}

impl TaskService {
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// List tasks, optionally filtered by a `status` string.
    ///
    /// `"active"` and `"completed"` (case-insensitive) restrict the view;
    /// anything else, including absence, returns everything.
    pub async fn list_tasks(&self, status: Option<&str>) -> Vec<Task> {
        self.store.list(StatusFilter::parse(status)).await
    }

    /// Get a single task by id.
    pub async fn get_task(&self, id: Uuid) -> Option<Task> {
        self.store.get(id).await
    }

    /// Create a task from a description.
    ///
    /// Assigns a fresh id, trims surrounding whitespace, and starts the task
    /// incomplete. Emptiness and length limits are enforced at the API
    /// boundary before this is called.
    pub async fn create_task(&self, description: &str) -> Task {
        let task = Task::new(description.trim().to_string());
        tracing::debug!(id = %task.id, "creating task");
        self.store.create(task).await
    }

    /// Apply a partial update to a task.
    ///
    /// Only the fields present in `patch` change; a supplied description is
    /// trimmed on the way in. Returns `None` if the id is unknown. Empty
    /// patches are rejected at the API boundary before this is called.
    pub async fn update_task(&self, id: Uuid, patch: TaskPatch) -> Option<Task> {
        self.store
            .update(id, |task| {
                if let Some(description) = patch.description {
                    task.description = description.trim().to_string();
                }
                if let Some(is_completed) = patch.is_completed {
                    task.is_completed = is_completed;
                }
            })
            .await
    }

    /// Delete a task, reporting whether it existed.
    pub async fn delete_task(&self, id: Uuid) -> bool {
        self.store.delete(id).await
    }

    /// Remove every task. Intended for test/reset use only.
    pub async fn clear_all(&self) {
        tracing::info!("clearing all tasks");
        self.store.clear().await;
    }
}
