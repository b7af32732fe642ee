//! # Todo Sync Gateway
//!
//! HTTP implementation of the remote todo gateway.
//!
//! This crate provides [`HttpTodoGateway`], a `reqwest`-based client for a
//! conventional REST resource over todo records:
//!
//! - `GET /todos` - fetch the current collection
//! - `POST /todos` - create a record (service assigns the identifier)
//! - `PUT /todos/{id}` - update a record, echoing the authoritative result
//! - `DELETE /todos/{id}` - delete a record
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use todo_sync_core::gateway::TodoGateway;
//! use todo_sync_gateway::HttpTodoGateway;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = HttpTodoGateway::new("http://localhost:8080/api");
//! let todos = gateway.list().await?;
//! println!("{} todos", todos.len());
//! # Ok(())
//! # }
//! ```

mod client;

pub use client::{BASE_URL_ENV, HttpTodoGateway};
