//! Domain types for todo records.
//!
//! A [`TodoItem`] is the unit the remote service stores and echoes back. The
//! identifier is assigned by the service, so a record starts life without one
//! and carries it immutably from the first echo onwards.

use serde::{Deserialize, Serialize};

/// Server-assigned identifier for a todo item
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(i64);

impl TodoId {
    /// Creates a `TodoId` from a raw identifier
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for TodoId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A single todo item
///
/// Wire shape: `{ "id": 3, "title": "Buy milk", "completed": false }`, with
/// `id` omitted for a not-yet-persisted candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Identifier; `None` until the remote service has persisted the record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<TodoId>,
    /// Title/description of the todo
    pub title: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a not-yet-persisted candidate with the given title
    #[must_use]
    pub const fn candidate(title: String) -> Self {
        Self {
            id: None,
            title,
            completed: false,
        }
    }

    /// Returns a copy with the `completed` flag inverted
    ///
    /// This is the locally-guessed record sent to the gateway on toggle; the
    /// gateway's echoed record, not this copy, is what gets applied to state.
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}
