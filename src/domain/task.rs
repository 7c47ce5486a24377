//! Task domain model.
//!
//! The task record is permissive by design: status, priority, and category
//! are free strings, and every field has a documented default substituted
//! on creation. Nothing here validates beyond default substitution.

use chrono::{SecondsFormat, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

// =============================================================================
// Task Id
// =============================================================================

/// Alphabet for generated task ids: 64 URL-safe symbols.
const ID_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Length of generated task ids.
const ID_LENGTH: usize = 16;

/// Unique identifier for a task.
///
/// This is a newtype wrapper around an opaque string. Generated ids are
/// 16 characters drawn uniformly from a URL-safe alphabet. Caller-supplied
/// ids are accepted verbatim; uniqueness is not enforced, and a colliding
/// id resolves to the first match in insertion order on lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a `TaskId` from an existing string.
    ///
    /// This is a pure function - it accepts the id verbatim. Use
    /// [`TaskId::generate`] to create a new random id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new random 16-character `TaskId`.
    ///
    /// **Note**: This is an impure function (side effect: OS randomness).
    #[must_use]
    pub fn generate() -> Self {
        let mut rng = StdRng::from_os_rng();
        let id = (0..ID_LENGTH)
            .map(|_| char::from(ID_ALPHABET[rng.random_range(0..ID_ALPHABET.len())]))
            .collect();
        Self(id)
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl From<&str> for TaskId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TaskId {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// Timestamps
// =============================================================================

/// Returns the current time as an ISO-8601 UTC string with millisecond
/// precision, the format clients round-trip back to the service.
///
/// **Note**: This is an impure function (side effect: system clock).
#[must_use]
pub fn current_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

// =============================================================================
// Task
// =============================================================================

/// One to-do record with status, priority, and category metadata.
///
/// Timestamps are stored as the caller-visible strings so that clients can
/// import records with pre-existing timestamps; the service never parses
/// them back. Serialization follows the wire contract, camelCase where a
/// field name has two words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique opaque identifier.
    pub id: TaskId,
    /// Title of the task.
    pub title: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// Status label, a free string (`"pending"` by default).
    pub status: String,
    /// Category label, not validated against the document's category list.
    pub category: String,
    /// Priority label, a free string (`"medium"` by default).
    pub priority: String,
    /// Optional due date string.
    pub due_date: Option<String>,
    /// Creation timestamp.
    pub created_at: String,
    /// Last-update timestamp, refreshed on every update unless the caller
    /// supplies one explicitly.
    pub updated_at: String,
}

// =============================================================================
// Tests
// =============================================================================
