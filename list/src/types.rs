//! Domain state and actions for the synced todo list.
//!
//! The list state holds an ordered sequence of todo items, the scratch text
//! for a not-yet-submitted item, and an optional detached copy of an item
//! under edit. It is mutated only by the reducer, either from local edit-mode
//! intents or from gateway response actions.

use todo_sync_core::todo::{TodoId, TodoItem};
use todo_sync_macros::Action;

/// State of the synced todo list
///
/// `items` holds arrival/display order: the initial load preserves the
/// gateway's order and newly created items are prepended (most-recent-first).
/// No other reordering occurs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    /// Ordered sequence of todo items
    pub items: Vec<TodoItem>,
    /// Scratch text for a not-yet-submitted new item
    pub draft_title: String,
    /// Detached copy of the item currently being edited, if any
    ///
    /// Invariant: while `Some`, the corresponding original in `items` is
    /// unchanged until the edit is committed or discarded.
    pub editing: Option<TodoItem>,
}

impl ListState {
    /// Creates a new empty list state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of completed items
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|t| t.completed).count()
    }

    /// Returns the number of items still open
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        self.items.iter().filter(|t| !t.completed).count()
    }

    /// Returns the item with the given identifier
    #[must_use]
    pub fn find(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|t| t.id == Some(id))
    }

    /// Checks if an item with the given identifier exists
    #[must_use]
    pub fn contains(&self, id: TodoId) -> bool {
        self.find(id).is_some()
    }

    pub(crate) fn find_mut(&mut self, id: TodoId) -> Option<&mut TodoItem> {
        self.items.iter_mut().find(|t| t.id == Some(id))
    }
}

/// Label for the gateway operation a failure originated from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatewayOp {
    /// Fetching the full collection
    Load,
    /// Creating a new item
    Create,
    /// Toggling an item's completed flag
    Toggle,
    /// Saving an edited item
    SaveEdit,
    /// Deleting an item
    Remove,
}

impl std::fmt::Display for GatewayOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Create => write!(f, "create"),
            Self::Toggle => write!(f, "toggle"),
            Self::SaveEdit => write!(f, "save-edit"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// Actions for the synced todo list
///
/// Intents originate from the user; responses are produced by completed
/// gateway effects. Every mutation of server-identified state happens in a
/// response handler, from the gateway's echoed record - never optimistically.
#[derive(Action, Clone, Debug, PartialEq)]
pub enum TodoListAction {
    // ========== Intents ==========
    /// Intent: fetch the current collection and replace `items` wholesale
    #[intent]
    Initialize,

    /// Intent: the draft text changed
    #[intent]
    DraftChanged {
        /// New scratch text
        text: String,
    },

    /// Intent: submit the draft as a new item
    ///
    /// Silently ignored while the trimmed draft is empty.
    #[intent]
    SubmitNew,

    /// Intent: invert the completed flag of an item
    #[intent]
    Toggle {
        /// Item to toggle
        id: TodoId,
    },

    /// Intent: start editing an item (detached copy, last-call-wins)
    #[intent]
    BeginEdit {
        /// Item to edit
        id: TodoId,
    },

    /// Intent: the edited title changed
    #[intent]
    EditingTitleChanged {
        /// New title text
        text: String,
    },

    /// Intent: save the edited item
    ///
    /// Silently ignored while no edit is open or the trimmed title is empty;
    /// edit mode stays open in both cases.
    #[intent]
    CommitEdit,

    /// Intent: abandon the open edit without a remote call
    #[intent]
    DiscardEdit,

    /// Intent: delete an item
    #[intent]
    Remove {
        /// Item to delete
        id: TodoId,
    },

    // ========== Responses ==========
    /// Response: the gateway returned the full collection
    #[response]
    Loaded {
        /// Records in the gateway's display order
        items: Vec<TodoItem>,
    },

    /// Response: the gateway persisted a new item
    #[response]
    Created {
        /// Echoed record carrying the server-assigned identifier
        item: TodoItem,
    },

    /// Response: the gateway applied a toggle
    #[response]
    Toggled {
        /// Authoritative post-update record
        item: TodoItem,
    },

    /// Response: the gateway applied an edit
    #[response]
    EditSaved {
        /// Authoritative post-update record
        item: TodoItem,
    },

    /// Response: the gateway deleted an item
    #[response]
    Removed {
        /// Identifier of the deleted item
        id: TodoId,
    },

    /// Response: a gateway call failed
    ///
    /// Reported once through the diagnostic log and otherwise dropped; state
    /// is left in its pre-call form.
    #[response]
    GatewayFailed {
        /// Operation that failed
        op: GatewayOp,
        /// Rendered error message
        message: String,
    },
}
