//! In-memory task storage (non-persistent).
//!
//! One shared `TaskStore` instance backs every request. All state is lost on
//! process restart.

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::task::{StatusFilter, Task};

/// Concurrent `id → task` map.
///
/// Every operation takes the lock for the duration of the call, so
/// single-key operations are atomic. There are no cross-key transactions.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<HashMap<Uuid, Task>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: RwLock::new(HashMap::new()),
        }
    }

    /// List tasks, optionally restricted to a completion state.
    ///
    /// Order is map-iteration order; callers must not rely on it.
    pub async fn list(&self, filter: Option<StatusFilter>) -> Vec<Task> {
        let tasks = self.tasks.read().await;
        match filter {
            Some(filter) => tasks
                .values()
                .filter(|task| filter.matches(task))
                .cloned()
                .collect(),
            None => tasks.values().cloned().collect(),
        }
    }

    /// Get a single task by id.
    pub async fn get(&self, id: Uuid) -> Option<Task> {
        self.tasks.read().await.get(&id).cloned()
    }

    /// Insert a task under its id and return the stored record.
    ///
    /// If the id is already present the existing record is kept. With fresh
    /// v4 ids this cannot happen in practice.
    pub async fn create(&self, task: Task) -> Task {
        self.tasks
            .write()
            .await
            .entry(task.id)
            .or_insert(task)
            .clone()
    }

    /// Mutate the stored task under the write lock and return the result.
    ///
    /// The closure runs while the lock is held, so a concurrent update to
    /// the same key cannot interleave with the read-modify-write. Returns
    /// `None` if the id is unknown.
    pub async fn update(&self, id: Uuid, apply: impl FnOnce(&mut Task)) -> Option<Task> {
        let mut tasks = self.tasks.write().await;
        let task = tasks.get_mut(&id)?;
        apply(task);
        Some(task.clone())
    }

    /// Remove a task, reporting whether it was present.
    pub async fn delete(&self, id: Uuid) -> bool {
        self.tasks.write().await.remove(&id).is_some()
    }

    /// Empty the store.
    pub async fn clear(&self) {
        self.tasks.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_get_returns_stored_task() {
        let store = TaskStore::new();
        let task = Task::new("Write report".to_string());
        let id = task.id;

        let stored = store.create(task).await;
        assert_eq!(stored.id, id);

        let fetched = store.get(id).await.expect("task should be present");
        assert_eq!(fetched.description, "Write report");
        assert!(!fetched.is_completed);
    }

    #[tokio::test]
    async fn test_create_keeps_existing_on_id_collision() {
        let store = TaskStore::new();
        let original = Task::new("original".to_string());
        let id = original.id;
        store.create(original).await;

        let mut duplicate = Task::new("duplicate".to_string());
        duplicate.id = id;
        let stored = store.create(duplicate).await;

        assert_eq!(
            stored.description, "original",
            "an existing record should never be overwritten by create"
        );
    }

    #[tokio::test]
    async fn test_list_filters_by_completion_state() {
        let store = TaskStore::new();
        store.create(Task::new("open".to_string())).await;
        let mut done = Task::new("done".to_string());
        done.is_completed = true;
        store.create(done).await;

        let all = store.list(None).await;
        let active = store.list(Some(StatusFilter::Active)).await;
        let completed = store.list(Some(StatusFilter::Completed)).await;

        assert_eq!(all.len(), 2);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].description, "open");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].description, "done");
    }

    #[tokio::test]
    async fn test_update_mutates_under_lock_and_reports_absence() {
        let store = TaskStore::new();
        let task = Task::new("initial".to_string());
        let id = task.id;
        store.create(task).await;

        let updated = store
            .update(id, |task| task.is_completed = true)
            .await
            .expect("update of a present task should succeed");
        assert!(updated.is_completed);
        assert_eq!(updated.description, "initial");

        let missing = store.update(Uuid::new_v4(), |task| task.is_completed = true).await;
        assert!(missing.is_none(), "updating an unknown id should return None");
    }

    #[tokio::test]
    async fn test_delete_reports_whether_removal_occurred() {
        let store = TaskStore::new();
        let task = Task::new("ephemeral".to_string());
        let id = task.id;
        store.create(task).await;

        assert!(store.delete(id).await);
        assert!(!store.delete(id).await, "second delete should report absence");
        assert!(store.get(id).await.is_none());
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = TaskStore::new();
        store.create(Task::new("a".to_string())).await;
        store.create(Task::new("b".to_string())).await;

        store.clear().await;
        assert!(store.list(None).await.is_empty());

        store.clear().await;
        assert!(store.list(None).await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_on_different_keys() {
        let store = std::sync::Arc::new(TaskStore::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = std::sync::Arc::clone(&store);
                tokio::spawn(async move { store.create(Task::new(format!("task {}", i))).await })
            })
            .collect();
        for handle in handles {
            handle.await.expect("create task should not panic");
        }

        assert_eq!(store.list(None).await.len(), 32);
    }
}
