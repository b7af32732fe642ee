//! Scripted gateway double for fast, deterministic tests
//!
//! [`MockTodoGateway`] plays back scripted results per operation, records the
//! calls it receives, and can delay individual results to reproduce
//! out-of-order completion.

#![allow(clippy::unwrap_used)] // Test infrastructure uses unwrap for simplicity
#![allow(clippy::missing_panics_doc)] // Test utilities document panics where critical

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use todo_sync_core::gateway::{GatewayError, GatewayFuture, TodoGateway};
use todo_sync_core::todo::{TodoId, TodoItem};

/// A call received by [`MockTodoGateway`], in arrival order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GatewayCall {
    /// `list()` was invoked
    List,
    /// `create(candidate)` was invoked
    Create(TodoItem),
    /// `update(id, record)` was invoked
    Update(TodoId, TodoItem),
    /// `delete(id)` was invoked
    Delete(TodoId),
}

/// One scripted playback entry
struct Scripted<T> {
    result: Result<T, GatewayError>,
    latency: Option<Duration>,
}

#[derive(Default)]
struct Inner {
    list: VecDeque<Scripted<Vec<TodoItem>>>,
    create: VecDeque<Scripted<TodoItem>>,
    update: VecDeque<Scripted<TodoItem>>,
    delete: VecDeque<Scripted<()>>,
    calls: Vec<GatewayCall>,
}

/// Scripted test double for the remote todo gateway
///
/// Results are consumed in FIFO order per operation. A call with no scripted
/// result resolves to a [`GatewayError::Request`] describing the miss, so an
/// under-scripted test fails visibly instead of hanging.
///
/// # Example
///
/// ```
/// use todo_sync_core::gateway::TodoGateway;
/// use todo_sync_core::todo::TodoId;
/// use todo_sync_testing::{GatewayCall, MockTodoGateway};
///
/// # async fn example() {
/// let gateway = MockTodoGateway::new();
/// gateway.script_delete(Ok(()));
///
/// gateway.delete(TodoId::new(3)).await.unwrap();
///
/// assert_eq!(gateway.calls(), vec![GatewayCall::Delete(TodoId::new(3))]);
/// # }
/// ```
#[derive(Default)]
pub struct MockTodoGateway {
    inner: Mutex<Inner>,
}

impl MockTodoGateway {
    /// Create a new mock with nothing scripted
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next `list()` result
    pub fn script_list(&self, result: Result<Vec<TodoItem>, GatewayError>) {
        self.push_list(result, None);
    }

    /// Script the next `list()` result with an artificial latency
    pub fn script_list_after(&self, latency: Duration, result: Result<Vec<TodoItem>, GatewayError>) {
        self.push_list(result, Some(latency));
    }

    /// Script the next `create()` result
    pub fn script_create(&self, result: Result<TodoItem, GatewayError>) {
        self.push_create(result, None);
    }

    /// Script the next `create()` result with an artificial latency
    pub fn script_create_after(&self, latency: Duration, result: Result<TodoItem, GatewayError>) {
        self.push_create(result, Some(latency));
    }

    /// Script the next `update()` result
    pub fn script_update(&self, result: Result<TodoItem, GatewayError>) {
        self.push_update(result, None);
    }

    /// Script the next `update()` result with an artificial latency
    ///
    /// Scripting two updates with inverted latencies reproduces responses
    /// arriving in the reverse of dispatch order.
    pub fn script_update_after(&self, latency: Duration, result: Result<TodoItem, GatewayError>) {
        self.push_update(result, Some(latency));
    }

    /// Script the next `delete()` result
    pub fn script_delete(&self, result: Result<(), GatewayError>) {
        self.push_delete(result, None);
    }

    /// Script the next `delete()` result with an artificial latency
    pub fn script_delete_after(&self, latency: Duration, result: Result<(), GatewayError>) {
        self.push_delete(result, Some(latency));
    }

    /// Calls received so far, in arrival order
    #[must_use]
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Number of scripted results not yet consumed
    #[must_use]
    pub fn pending(&self) -> usize {
        let inner = self.inner.lock().unwrap();
        inner.list.len() + inner.create.len() + inner.update.len() + inner.delete.len()
    }

    /// Drop all scripted results and recorded calls (for test isolation)
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.list.clear();
        inner.create.clear();
        inner.update.clear();
        inner.delete.clear();
        inner.calls.clear();
    }

    fn push_list(&self, result: Result<Vec<TodoItem>, GatewayError>, latency: Option<Duration>) {
        self.inner
            .lock()
            .unwrap()
            .list
            .push_back(Scripted { result, latency });
    }

    fn push_create(&self, result: Result<TodoItem, GatewayError>, latency: Option<Duration>) {
        self.inner
            .lock()
            .unwrap()
            .create
            .push_back(Scripted { result, latency });
    }

    fn push_update(&self, result: Result<TodoItem, GatewayError>, latency: Option<Duration>) {
        self.inner
            .lock()
            .unwrap()
            .update
            .push_back(Scripted { result, latency });
    }

    fn push_delete(&self, result: Result<(), GatewayError>, latency: Option<Duration>) {
        self.inner
            .lock()
            .unwrap()
            .delete
            .push_back(Scripted { result, latency });
    }

    /// Resolve one scripted entry, honoring its latency
    async fn play<T>(scripted: Option<Scripted<T>>, operation: &str) -> Result<T, GatewayError> {
        match scripted {
            Some(Scripted { result, latency }) => {
                if let Some(latency) = latency {
                    tokio::time::sleep(latency).await;
                }
                result
            }
            None => Err(GatewayError::Request(format!(
                "no scripted response for {operation}"
            ))),
        }
    }
}

impl TodoGateway for MockTodoGateway {
    fn list(&self) -> GatewayFuture<'_, Vec<TodoItem>> {
        let scripted = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(GatewayCall::List);
            inner.list.pop_front()
        };
        Box::pin(Self::play(scripted, "list()"))
    }

    fn create(&self, candidate: TodoItem) -> GatewayFuture<'_, TodoItem> {
        let scripted = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(GatewayCall::Create(candidate));
            inner.create.pop_front()
        };
        Box::pin(Self::play(scripted, "create()"))
    }

    fn update(&self, id: TodoId, record: TodoItem) -> GatewayFuture<'_, TodoItem> {
        let scripted = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(GatewayCall::Update(id, record));
            inner.update.pop_front()
        };
        Box::pin(Self::play(scripted, "update()"))
    }

    fn delete(&self, id: TodoId) -> GatewayFuture<'_, ()> {
        let scripted = {
            let mut inner = self.inner.lock().unwrap();
            inner.calls.push(GatewayCall::Delete(id));
            inner.delete.pop_front()
        };
        Box::pin(Self::play(scripted, "delete()"))
    }
}
