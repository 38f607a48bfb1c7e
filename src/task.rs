//! The task record and list filters.

use uuid::Uuid;

/// Maximum description length in Unicode scalar values, after trimming.
pub const MAX_DESCRIPTION_CHARS: usize = 300;

/// A described unit of work with a completion flag.
///
/// The store holds the authoritative record; everything else works on
/// clones that live for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, immutable for the process lifetime
    pub id: Uuid,

    /// Task text; never empty or whitespace-only once stored
    pub description: String,

    /// Completion flag
    pub is_completed: bool,
}

impl Task {
    /// Create a task with a fresh identifier and `is_completed = false`.
    ///
    /// The caller is responsible for normalizing `description` first.
    pub fn new(description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            description,
            is_completed: false,
        }
    }
}

/// A view constraint applied when listing tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Tasks with `is_completed == false`
    Active,
    /// Tasks with `is_completed == true`
    Completed,
}

impl StatusFilter {
    /// Parse a `status` query value, case-insensitively.
    ///
    /// Absent or unrecognized values mean "no filter" (return everything).
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value?.to_lowercase().as_str() {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Whether `task` falls inside this filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::Active => !task.is_completed,
            Self::Completed => task.is_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete_with_fresh_id() {
        let a = Task::new("one".to_string());
        let b = Task::new("two".to_string());
        assert!(!a.is_completed);
        assert!(!b.is_completed);
        assert_ne!(a.id, b.id, "each task should get its own identifier");
    }

    #[test]
    fn filter_parse_is_case_insensitive() {
        assert_eq!(StatusFilter::parse(Some("active")), Some(StatusFilter::Active));
        assert_eq!(StatusFilter::parse(Some("ACTIVE")), Some(StatusFilter::Active));
        assert_eq!(
            StatusFilter::parse(Some("Completed")),
            Some(StatusFilter::Completed)
        );
    }

    #[test]
    fn filter_parse_unknown_means_no_filter() {
        assert_eq!(StatusFilter::parse(None), None);
        assert_eq!(StatusFilter::parse(Some("all")), None);
        assert_eq!(StatusFilter::parse(Some("done")), None);
        assert_eq!(StatusFilter::parse(Some("")), None);
    }

    #[test]
    fn filter_matches_partition_tasks() {
        let open = Task::new("open".to_string());
        let mut done = Task::new("done".to_string());
        done.is_completed = true;

        assert!(StatusFilter::Active.matches(&open));
        assert!(!StatusFilter::Active.matches(&done));
        assert!(StatusFilter::Completed.matches(&done));
        assert!(!StatusFilter::Completed.matches(&open));
    }
}
