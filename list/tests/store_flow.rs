//! End-to-end tests driving the todo list through a real Store
//!
//! Intents go in, effects run against a scripted gateway, and responses are
//! fed back through the reducer - the full synchronization loop, including
//! out-of-order completion.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use std::sync::Arc;
use std::time::Duration;
use todo_sync_core::gateway::{GatewayError, TodoGateway};
use todo_sync_core::todo::{TodoId, TodoItem};
use todo_sync_list::{ListState, TodoListAction, TodoListEnvironment, TodoListReducer};
use todo_sync_runtime::Store;
use todo_sync_testing::{GatewayCall, MockTodoGateway};

type ListStore = Store<ListState, TodoListAction, TodoListEnvironment, TodoListReducer>;

fn item(id: i64, title: &str, completed: bool) -> TodoItem {
    TodoItem {
        id: Some(TodoId::new(id)),
        title: title.to_string(),
        completed,
    }
}

fn failure() -> GatewayError {
    GatewayError::Status {
        status: 500,
        body: "database down".to_string(),
    }
}

fn store_with(gateway: &Arc<MockTodoGateway>) -> ListStore {
    let env = TodoListEnvironment::new(Arc::clone(gateway) as Arc<dyn TodoGateway>);
    Store::new(ListState::new(), TodoListReducer::new(), env)
}

async fn send_and_settle(store: &ListStore, action: TodoListAction) {
    let mut handle = store.send(action).await.unwrap();
    handle.wait().await;
}

#[tokio::test]
async fn initialize_replaces_items_with_gateway_snapshot() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![
        item(2, "Write docs", false),
        item(1, "Buy milk", true),
    ]));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;

    let items = store.state(|s| s.items.clone()).await;
    assert_eq!(items, vec![item(2, "Write docs", false), item(1, "Buy milk", true)]);
    assert_eq!(gateway.calls(), vec![GatewayCall::List]);
}

#[tokio::test]
async fn initialize_failure_keeps_prior_items() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Err(failure()));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;

    // Empty on first load, and left that way
    assert!(store.state(ListState::is_empty).await);
}

#[tokio::test]
async fn submit_new_sends_trimmed_candidate_and_prepends_echo() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![item(1, "Buy milk", false)]));
    gateway.script_create(Ok(item(2, "Write docs", false)));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;
    send_and_settle(
        &store,
        TodoListAction::DraftChanged {
            text: "  Write docs  ".to_string(),
        },
    )
    .await;
    send_and_settle(&store, TodoListAction::SubmitNew).await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items[0], item(2, "Write docs", false));
    assert_eq!(state.len(), 2);
    assert_eq!(state.draft_title, "");

    // The candidate crossed the wire trimmed and without an identifier
    assert_eq!(
        gateway.calls()[1],
        GatewayCall::Create(TodoItem::candidate("Write docs".to_string()))
    );
}

#[tokio::test]
async fn submit_new_failure_preserves_draft_for_retry() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_create(Err(failure()));
    gateway.script_create(Ok(item(1, "Buy milk", false)));
    let store = store_with(&gateway);

    send_and_settle(
        &store,
        TodoListAction::DraftChanged {
            text: "Buy milk".to_string(),
        },
    )
    .await;

    // First attempt fails: list untouched, draft kept
    send_and_settle(&store, TodoListAction::SubmitNew).await;
    let state = store.state(Clone::clone).await;
    assert!(state.is_empty());
    assert_eq!(state.draft_title, "Buy milk");

    // Retry with the preserved draft succeeds
    send_and_settle(&store, TodoListAction::SubmitNew).await;
    let state = store.state(Clone::clone).await;
    assert_eq!(state.items, vec![item(1, "Buy milk", false)]);
    assert_eq!(state.draft_title, "");
}

#[tokio::test]
async fn blank_submit_issues_no_gateway_call() {
    let gateway = Arc::new(MockTodoGateway::new());
    let store = store_with(&gateway);

    send_and_settle(
        &store,
        TodoListAction::DraftChanged {
            text: "   ".to_string(),
        },
    )
    .await;
    send_and_settle(&store, TodoListAction::SubmitNew).await;

    assert!(gateway.calls().is_empty());
}

#[tokio::test]
async fn toggle_failure_leaves_items_unchanged() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![item(1, "Buy milk", false)]));
    gateway.script_update(Err(failure()));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;
    let before = store.state(Clone::clone).await;

    send_and_settle(&store, TodoListAction::Toggle { id: TodoId::new(1) }).await;

    let after = store.state(Clone::clone).await;
    assert_eq!(after, before);
}

#[tokio::test]
async fn toggle_applies_server_echo() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![item(1, "Buy milk", false)]));
    // The service echoes a normalized title alongside the flipped flag
    gateway.script_update(Ok(item(1, "Buy milk!", true)));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;
    send_and_settle(&store, TodoListAction::Toggle { id: TodoId::new(1) }).await;

    let state = store.state(Clone::clone).await;
    assert_eq!(state.items, vec![item(1, "Buy milk!", true)]);

    // The wire carried the local inversion, keyed by identifier
    assert_eq!(
        gateway.calls()[1],
        GatewayCall::Update(TodoId::new(1), item(1, "Buy milk", true))
    );
}

#[tokio::test]
async fn reverse_order_completions_patch_their_own_entries() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![
        item(1, "Buy milk", false),
        item(2, "Write docs", false),
    ]));
    // First dispatched toggle resolves slowly, second quickly: the echoes
    // arrive in the reverse of dispatch order
    gateway.script_update_after(Duration::from_millis(60), Ok(item(1, "Buy milk", true)));
    gateway.script_update_after(Duration::from_millis(5), Ok(item(2, "Write docs", true)));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;

    let mut first = store
        .send(TodoListAction::Toggle { id: TodoId::new(1) })
        .await
        .unwrap();
    let mut second = store
        .send(TodoListAction::Toggle { id: TodoId::new(2) })
        .await
        .unwrap();
    second.wait().await;
    first.wait().await;

    let state = store.state(Clone::clone).await;
    assert_eq!(
        state.items,
        vec![item(1, "Buy milk", true), item(2, "Write docs", true)]
    );
}

#[tokio::test]
async fn toggle_echo_after_concurrent_removal_is_dropped() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![
        item(1, "Buy milk", false),
        item(2, "Write docs", false),
    ]));
    // The toggle echo arrives only after the delete echo
    gateway.script_update_after(Duration::from_millis(50), Ok(item(1, "Buy milk", true)));
    gateway.script_delete(Ok(()));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;

    let mut toggle = store
        .send(TodoListAction::Toggle { id: TodoId::new(1) })
        .await
        .unwrap();
    send_and_settle(&store, TodoListAction::Remove { id: TodoId::new(1) }).await;
    toggle.wait().await;

    // The stale echo found no entry and was dropped
    let state = store.state(Clone::clone).await;
    assert_eq!(state.items, vec![item(2, "Write docs", false)]);
}

#[tokio::test]
async fn commit_edit_failure_keeps_edit_open_then_retry_succeeds() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![item(1, "Buy milk", false)]));
    gateway.script_update(Err(failure()));
    gateway.script_update(Ok(item(1, "Buy oat milk", false)));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;
    send_and_settle(&store, TodoListAction::BeginEdit { id: TodoId::new(1) }).await;
    send_and_settle(
        &store,
        TodoListAction::EditingTitleChanged {
            text: "Buy oat milk".to_string(),
        },
    )
    .await;

    // First commit fails: edit mode stays open, list untouched
    send_and_settle(&store, TodoListAction::CommitEdit).await;
    let state = store.state(Clone::clone).await;
    assert_eq!(state.editing.as_ref().unwrap().title, "Buy oat milk");
    assert_eq!(state.items, vec![item(1, "Buy milk", false)]);

    // Retry succeeds: echo applied, edit mode closed
    send_and_settle(&store, TodoListAction::CommitEdit).await;
    let state = store.state(Clone::clone).await;
    assert!(state.editing.is_none());
    assert_eq!(state.items, vec![item(1, "Buy oat milk", false)]);
}

#[tokio::test]
async fn remove_success_drops_entry_and_failure_keeps_it() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![
        item(1, "Buy milk", false),
        item(2, "Write docs", false),
    ]));
    gateway.script_delete(Err(failure()));
    gateway.script_delete(Ok(()));
    let store = store_with(&gateway);

    send_and_settle(&store, TodoListAction::Initialize).await;

    // Failed delete: both entries stay
    send_and_settle(&store, TodoListAction::Remove { id: TodoId::new(1) }).await;
    assert_eq!(store.state(ListState::len).await, 2);

    // Successful delete: exactly the matching entry goes
    send_and_settle(&store, TodoListAction::Remove { id: TodoId::new(1) }).await;
    let state = store.state(Clone::clone).await;
    assert_eq!(state.items, vec![item(2, "Write docs", false)]);
}

#[tokio::test]
async fn send_and_wait_for_terminal_response() {
    let gateway = Arc::new(MockTodoGateway::new());
    gateway.script_list(Ok(vec![item(1, "Buy milk", false)]));
    let store = store_with(&gateway);

    let result = store
        .send_and_wait_for(
            TodoListAction::Initialize,
            |a| {
                matches!(
                    a,
                    TodoListAction::Loaded { .. } | TodoListAction::GatewayFailed { .. }
                )
            },
            Duration::from_secs(1),
        )
        .await
        .unwrap();

    assert_eq!(
        result,
        TodoListAction::Loaded {
            items: vec![item(1, "Buy milk", false)]
        }
    );
}
