//! API request and response types.
//!
//! Wire bodies use lower-camel-case field names; `id` is the string form of
//! a UUID.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::task::Task;

/// A task as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
    /// Unique task identifier
    pub id: Uuid,

    /// Task text
    pub description: String,

    /// Completion flag
    pub is_completed: bool,
}

impl From<Task> for TaskDto {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            description: task.description,
            is_completed: task.is_completed,
        }
    }
}

/// Request to create a task.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    /// The task text; 1-300 characters after trimming
    pub description: String,
}

/// Partial update request. At least one field must be present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    /// Replacement text (trimmed before storage)
    pub description: Option<String>,

    /// Replacement completion flag
    pub is_completed: Option<bool>,
}

/// Query parameters for listing tasks.
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// `all`, `active`, or `completed`; unrecognized values mean `all`
    pub status: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_dto_serializes_camel_case() {
        let task = Task::new("Walk the dog".to_string());
        let id = task.id;
        let json = serde_json::to_value(TaskDto::from(task)).expect("serialization");

        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["description"], "Walk the dog");
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("is_completed").is_none());
    }

    #[test]
    fn update_request_distinguishes_omitted_fields() {
        let req: UpdateTaskRequest = serde_json::from_str(r#"{"isCompleted":true}"#)
            .expect("deserialization");
        assert_eq!(req.is_completed, Some(true));
        assert!(req.description.is_none());
    }
}
