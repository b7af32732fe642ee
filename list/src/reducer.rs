//! Reducer logic for the synced todo list.
//!
//! Every mutation that touches server-identified state is applied
//! pessimistically: the intent issues a gateway effect, and `items` is only
//! patched by the response handler, from the gateway's echoed record. Local
//! edit-mode transitions (`BeginEdit`, `EditingTitleChanged`, `DiscardEdit`,
//! `DraftChanged`) mutate state directly and issue no effect.

use crate::types::{GatewayOp, ListState, TodoListAction};
use std::sync::Arc;
use todo_sync_core::gateway::{GatewayError, TodoGateway};
use todo_sync_core::todo::{TodoId, TodoItem};
use todo_sync_core::{SmallVec, effect::Effect, reducer::Reducer, smallvec};

/// Environment dependencies for the todo list reducer
#[derive(Clone)]
pub struct TodoListEnvironment {
    /// Remote todo gateway
    pub gateway: Arc<dyn TodoGateway>,
}

impl TodoListEnvironment {
    /// Creates a new `TodoListEnvironment`
    #[must_use]
    pub fn new(gateway: Arc<dyn TodoGateway>) -> Self {
        Self { gateway }
    }
}

/// Reducer for the synced todo list
#[derive(Clone, Debug, Default)]
pub struct TodoListReducer;

impl TodoListReducer {
    /// Creates a new `TodoListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render a failure into its response action
    fn failed(op: GatewayOp, error: &GatewayError) -> TodoListAction {
        TodoListAction::GatewayFailed {
            op,
            message: error.to_string(),
        }
    }

    /// Effect: fetch the full collection
    fn load_effect(env: &TodoListEnvironment) -> Effect<TodoListAction> {
        let gateway = Arc::clone(&env.gateway);
        Effect::Future(Box::pin(async move {
            let action = match gateway.list().await {
                Ok(items) => TodoListAction::Loaded { items },
                Err(error) => Self::failed(GatewayOp::Load, &error),
            };
            Some(action)
        }))
    }

    /// Effect: create a candidate record (no identifier yet)
    fn create_effect(env: &TodoListEnvironment, candidate: TodoItem) -> Effect<TodoListAction> {
        let gateway = Arc::clone(&env.gateway);
        Effect::Future(Box::pin(async move {
            let action = match gateway.create(candidate).await {
                Ok(item) => TodoListAction::Created { item },
                Err(error) => Self::failed(GatewayOp::Create, &error),
            };
            Some(action)
        }))
    }

    /// Effect: update a record, resolving to the given success constructor
    ///
    /// Shared by toggle and edit saves - both are updates keyed by
    /// identifier, differing only in the response they resolve to.
    fn update_effect(
        env: &TodoListEnvironment,
        op: GatewayOp,
        id: TodoId,
        record: TodoItem,
        on_success: fn(TodoItem) -> TodoListAction,
    ) -> Effect<TodoListAction> {
        let gateway = Arc::clone(&env.gateway);
        Effect::Future(Box::pin(async move {
            let action = match gateway.update(id, record).await {
                Ok(item) => on_success(item),
                Err(error) => Self::failed(op, &error),
            };
            Some(action)
        }))
    }

    /// Effect: delete a record
    fn remove_effect(env: &TodoListEnvironment, id: TodoId) -> Effect<TodoListAction> {
        let gateway = Arc::clone(&env.gateway);
        Effect::Future(Box::pin(async move {
            let action = match gateway.delete(id).await {
                Ok(()) => TodoListAction::Removed { id },
                Err(error) => Self::failed(GatewayOp::Remove, &error),
            };
            Some(action)
        }))
    }

    /// Replace the entry matching the echoed record's identifier, in place
    ///
    /// If the entry is gone (e.g. removed while the call was in flight) the
    /// echo is dropped silently - response handlers locate their target by
    /// identifier, never by position.
    fn apply_echo(state: &mut ListState, item: TodoItem) {
        let Some(id) = item.id else {
            tracing::debug!("Gateway echoed a record without an identifier, dropping");
            return;
        };
        if let Some(slot) = state.find_mut(id) {
            *slot = item;
        }
    }
}

impl Reducer for TodoListReducer {
    type State = ListState;
    type Action = TodoListAction;
    type Environment = TodoListEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(action = action.name(), "Reducing action");

        match action {
            // ========== Intents ==========
            TodoListAction::Initialize => {
                smallvec![Self::load_effect(env)]
            }

            TodoListAction::DraftChanged { text } => {
                state.draft_title = text;
                smallvec![]
            }

            TodoListAction::SubmitNew => {
                let title = state.draft_title.trim();
                if title.is_empty() {
                    return smallvec![];
                }

                // The draft is only cleared by the Created response; a failed
                // create keeps it for retry
                let candidate = TodoItem::candidate(title.to_string());
                smallvec![Self::create_effect(env, candidate)]
            }

            TodoListAction::Toggle { id } => {
                let Some(current) = state.find(id) else {
                    return smallvec![];
                };

                // Send the local inversion; apply only the echo
                let record = current.toggled();
                smallvec![Self::update_effect(env, GatewayOp::Toggle, id, record, |item| {
                    TodoListAction::Toggled { item }
                })]
            }

            TodoListAction::BeginEdit { id } => {
                if let Some(item) = state.find(id) {
                    state.editing = Some(item.clone());
                }
                smallvec![]
            }

            TodoListAction::EditingTitleChanged { text } => {
                if let Some(editing) = &mut state.editing {
                    editing.title = text;
                }
                smallvec![]
            }

            TodoListAction::CommitEdit => {
                let Some(editing) = &state.editing else {
                    return smallvec![];
                };
                if editing.title.trim().is_empty() {
                    // Edit mode stays open; nothing is sent
                    return smallvec![];
                }
                let Some(id) = editing.id else {
                    tracing::debug!("Editing slot holds a record without an identifier, dropping commit");
                    return smallvec![];
                };

                let record = editing.clone();
                smallvec![Self::update_effect(env, GatewayOp::SaveEdit, id, record, |item| {
                    TodoListAction::EditSaved { item }
                })]
            }

            TodoListAction::DiscardEdit => {
                state.editing = None;
                smallvec![]
            }

            TodoListAction::Remove { id } => {
                smallvec![Self::remove_effect(env, id)]
            }

            // ========== Responses ==========
            TodoListAction::Loaded { items } => {
                state.items = items;
                smallvec![]
            }

            TodoListAction::Created { item } => {
                state.items.insert(0, item);
                state.draft_title.clear();
                smallvec![]
            }

            TodoListAction::Toggled { item } => {
                Self::apply_echo(state, item);
                smallvec![]
            }

            TodoListAction::EditSaved { item } => {
                Self::apply_echo(state, item);
                state.editing = None;
                smallvec![]
            }

            TodoListAction::Removed { id } => {
                state.items.retain(|t| t.id != Some(id));
                smallvec![]
            }

            TodoListAction::GatewayFailed { op, message } => {
                // The only reporting channel; state is left in its pre-call
                // form and the call is never retried
                tracing::warn!(op = %op, error = %message, "Todo gateway call failed");
                smallvec![]
            }
        }
    }
}
