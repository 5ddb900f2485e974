//! Named task filters and the derived filtered view.

use crate::model::task::Task;

/// Predicate selecting which tasks are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    /// Everything, in insertion order.
    #[default]
    All,
    /// Tasks not yet completed.
    Active,
    /// Completed tasks only.
    Completed,
}

impl TaskFilter {
    /// Returns whether the task belongs to this filter's view.
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Parses a user-facing filter name.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Some(Self::All),
            "active" => Some(Self::Active),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Stable display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        }
    }
}

/// Projects the collection through a filter, preserving insertion order.
pub fn visible_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

#[cfg(test)]
mod tests {
    use super::{visible_tasks, TaskFilter};
    use crate::model::task::Task;

    fn sample() -> Vec<Task> {
        let mut done = Task::new("done");
        done.completed = true;
        vec![Task::new("open"), done, Task::new("also open")]
    }

    #[test]
    fn parse_accepts_known_names_case_insensitively() {
        assert_eq!(TaskFilter::parse("All"), Some(TaskFilter::All));
        assert_eq!(TaskFilter::parse(" active "), Some(TaskFilter::Active));
        assert_eq!(TaskFilter::parse("COMPLETED"), Some(TaskFilter::Completed));
        assert_eq!(TaskFilter::parse("done"), Some(TaskFilter::Completed));
        assert_eq!(TaskFilter::parse("bogus"), None);
    }

    #[test]
    fn all_is_identity() {
        let tasks = sample();
        let visible = visible_tasks(&tasks, TaskFilter::All);
        assert_eq!(visible.len(), tasks.len());
    }

    #[test]
    fn active_and_completed_partition_the_collection() {
        let tasks = sample();
        let active = visible_tasks(&tasks, TaskFilter::Active);
        let completed = visible_tasks(&tasks, TaskFilter::Completed);

        assert_eq!(active.len() + completed.len(), tasks.len());
        assert!(active.iter().all(|task| !task.completed));
        assert!(completed.iter().all(|task| task.completed));
    }
}
