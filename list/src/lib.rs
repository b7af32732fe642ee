//! Synced todo list feature.
//!
//! This crate holds the client-side list-synchronization policy: an in-memory
//! list of todo items kept in step with a remote CRUD service. User intents
//! issue gateway calls; the list is patched only from the gateway's success
//! responses, with the echoed record as ground truth ("wait for echo"). It
//! demonstrates:
//!
//! - Pessimistic, echo-authoritative list patching
//! - A single-slot edit mode with detached copies
//! - Response handlers that locate targets by identifier, tolerating
//!   out-of-order completion and concurrent removal
//! - Testing with `ReducerTest` and `MockTodoGateway`
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_sync_list::{TodoListAction, TodoListEnvironment, TodoListReducer, ListState};
//! use todo_sync_gateway::HttpTodoGateway;
//! use todo_sync_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create environment and store
//! let gateway = Arc::new(HttpTodoGateway::new("http://localhost:8080/api"));
//! let env = TodoListEnvironment::new(gateway);
//! let store = Store::new(ListState::new(), TodoListReducer::new(), env);
//!
//! // Populate the list from the service
//! let mut handle = store.send(TodoListAction::Initialize).await?;
//! handle.wait().await;
//!
//! // Draft and submit a new item
//! store.send(TodoListAction::DraftChanged { text: "Buy milk".into() }).await?;
//! let mut handle = store.send(TodoListAction::SubmitNew).await?;
//! handle.wait().await;
//!
//! // Read state
//! let remaining = store.state(|s| s.remaining_count()).await;
//! println!("{remaining} todos remaining");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{TodoListEnvironment, TodoListReducer};
pub use types::{GatewayOp, ListState, TodoListAction};
