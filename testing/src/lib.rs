//! # Todo Sync Testing
//!
//! Testing utilities and helpers for the todo-sync architecture.
//!
//! This crate provides:
//! - [`MockTodoGateway`]: a scripted test double for the remote todo gateway
//! - [`ReducerTest`]: a fluent Given-When-Then harness for reducers
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use todo_sync_testing::MockTodoGateway;
//!
//! #[tokio::test]
//! async fn test_initialize_loads_items() {
//!     let gateway = Arc::new(MockTodoGateway::new());
//!     gateway.script_list(Ok(vec![]));
//!
//!     let env = TodoListEnvironment::new(gateway.clone());
//!     let store = Store::new(ListState::new(), TodoListReducer::new(), env);
//!
//!     let mut handle = store.send(TodoListAction::Initialize).await.unwrap();
//!     handle.wait().await;
//!
//!     assert_eq!(gateway.calls(), vec![GatewayCall::List]);
//! }
//! ```

pub mod mocks;

// Re-export commonly used items
pub use mocks::{GatewayCall, MockTodoGateway};
pub use reducer_test::{ReducerTest, assertions};
