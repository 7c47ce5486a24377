//! Data Transfer Objects for the task endpoints.
//!
//! Every field is optional: creation substitutes the documented default
//! for anything absent, and updates shallow-merge only the fields present.
//! Responses reuse the domain [`Task`] directly - the record is the wire
//! format.

use serde::{Deserialize, Deserializer};

use crate::domain::{Task, TaskId, current_timestamp};

/// Placeholder title substituted when a create request has none.
const UNTITLED: &str = "(untitled)";

/// Default status for new tasks.
const DEFAULT_STATUS: &str = "pending";

/// Default priority for new tasks.
const DEFAULT_PRIORITY: &str = "medium";

// =============================================================================
// Create
// =============================================================================

/// Request DTO for creating a task.
///
/// All fields are optional; there is no validation failure path. Supplying
/// `createdAt`/`updatedAt` allows importing records with pre-existing
/// timestamps.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    /// Caller-supplied id; a fresh one is generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl CreateTaskRequest {
    /// Builds a task, substituting the documented default for every absent
    /// field.
    ///
    /// **Note**: This is an impure function - it generates an id and reads
    /// the clock when the caller did not supply those fields.
    #[must_use]
    pub fn into_task(self) -> Task {
        let now = current_timestamp();
        Task {
            id: self.id.map_or_else(TaskId::generate, TaskId::new),
            title: self.title.unwrap_or_else(|| UNTITLED.to_string()),
            description: self.description,
            status: self.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
            category: self.category.unwrap_or_default(),
            priority: self.priority.unwrap_or_else(|| DEFAULT_PRIORITY.to_string()),
            due_date: self.due_date,
            created_at: self.created_at.unwrap_or_else(|| now.clone()),
            updated_at: self.updated_at.unwrap_or(now),
        }
    }
}

// =============================================================================
// Update
// =============================================================================

/// Request DTO for updating a task via shallow merge.
///
/// The nullable task fields (`description`, `dueDate`) distinguish absent
/// from explicitly null: omitting the field leaves the stored value
/// untouched, while sending `null` clears it. The non-nullable fields are
/// only merged when present with a value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub due_date: Option<Option<String>>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl UpdateTaskRequest {
    /// Shallow-merges the fields present in this request into `task`.
    ///
    /// `updatedAt` is refreshed to the current time unless the request
    /// supplies one explicitly.
    pub fn apply_to(self, task: &mut Task) {
        if let Some(id) = self.id {
            task.id = TaskId::new(id);
        }
        if let Some(title) = self.title {
            task.title = title;
        }
        if let Some(description) = self.description {
            task.description = description;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(category) = self.category {
            task.category = category;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(created_at) = self.created_at {
            task.created_at = created_at;
        }
        task.updated_at = self.updated_at.unwrap_or_else(current_timestamp);
    }
}

/// Deserializes a field that was present in the body, keeping an explicit
/// `null` distinguishable from an absent field.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// =============================================================================
// Tests
// =============================================================================
