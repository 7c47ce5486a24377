//! Persisted document root.

use serde::{Deserialize, Serialize};

use crate::domain::task::Task;

/// Categories seeded into a fresh document.
const DEFAULT_CATEGORIES: [&str; 2] = ["work", "personal"];

/// The full persisted structure: every task plus the category labels.
///
/// Categories are plain strings with no object identity and no referential
/// integrity against the tasks that mention them. Task ids are expected to
/// be unique but not enforced; lookups resolve to the first match in
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// All task records, in insertion order.
    pub tasks: Vec<Task>,
    /// Category labels offered to clients.
    pub categories: Vec<String>,
}

impl Document {
    /// Returns the task with the given id, if present.
    #[must_use]
    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id.as_str() == id)
    }

    /// Returns a mutable reference to the task with the given id.
    pub fn find_task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id.as_str() == id)
    }

    /// Removes the task with the given id.
    ///
    /// Returns `true` when a record was removed. At most one record is
    /// removed per call, even if ids collide.
    pub fn remove_task(&mut self, id: &str) -> bool {
        match self.tasks.iter().position(|task| task.id.as_str() == id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for Document {
    /// A fresh document: no tasks, the two stock categories.
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::task::{TaskId, current_timestamp};

    fn task_with_id(id: &str) -> Task {
        let now = current_timestamp();
        Task {
            id: TaskId::new(id),
            title: format!("Task {id}"),
            description: None,
            status: "pending".to_string(),
            category: String::new(),
            priority: "medium".to_string(),
            due_date: None,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    #[rstest]
    fn test_default_document_has_stock_categories() {
        let document = Document::default();
        assert!(document.tasks.is_empty());
        assert_eq!(document.categories, vec!["work", "personal"]);
    }

    #[rstest]
    fn test_find_task_by_id() {
        let mut document = Document::default();
        document.tasks.push(task_with_id("a"));
        document.tasks.push(task_with_id("b"));

        let found = document.find_task("b").expect("task b should exist");
        assert_eq!(found.title, "Task b");
        assert!(document.find_task("missing").is_none());
    }

    #[rstest]
    fn test_find_task_with_colliding_ids_returns_first() {
        let mut document = Document::default();
        let mut first = task_with_id("dup");
        first.title = "first".to_string();
        let mut second = task_with_id("dup");
        second.title = "second".to_string();
        document.tasks.push(first);
        document.tasks.push(second);

        let found = document.find_task("dup").expect("task should exist");
        assert_eq!(found.title, "first");
    }

    #[rstest]
    fn test_remove_task_removes_exactly_one() {
        let mut document = Document::default();
        document.tasks.push(task_with_id("a"));
        document.tasks.push(task_with_id("b"));

        assert!(document.remove_task("a"));
        assert_eq!(document.tasks.len(), 1);
        assert!(document.find_task("a").is_none());
        assert!(!document.remove_task("a"));
        assert_eq!(document.tasks.len(), 1);
    }
}
