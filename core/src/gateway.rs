//! Remote todo gateway trait and related types.
//!
//! This module defines the core abstraction for the remote todo service - a
//! conventional request/response CRUD resource over todo records.
//!
//! # Design
//!
//! The `TodoGateway` trait is deliberately minimal. It provides exactly the
//! four operations the list-synchronization policy needs:
//!
//! - List the current collection
//! - Create a record (the service assigns the identifier)
//! - Update a record by identifier (the service echoes the authoritative
//!   post-update record)
//! - Delete a record by identifier
//!
//! Each operation is a single asynchronous exchange; exactly one of the
//! success/failure branches resolves, exactly once.
//!
//! # Implementations
//!
//! - `HttpTodoGateway` (in `todo-sync-gateway` crate): production HTTP client
//! - `MockTodoGateway` (in `todo-sync-testing` crate): scripted test double
//!
//! # Dyn Compatibility
//!
//! This trait uses explicit `Pin<Box<dyn Future>>` returns instead of
//! `async fn` to enable trait object usage (`Arc<dyn TodoGateway>`). This is
//! required for the effect system, where reducers create effects that capture
//! the gateway.

use crate::todo::{TodoId, TodoItem};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by gateway operations.
pub type GatewayFuture<'a, T> =
    Pin<Box<dyn Future<Output = Result<T, GatewayError>> + Send + 'a>>;

/// Errors that can occur during gateway operations.
///
/// The list-synchronization policy does not distinguish among these: every
/// variant is rendered to a message, reported once through the diagnostic
/// log, and dropped. The variants exist so gateway implementations can map
/// their failure modes faithfully.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Gateway configuration is incomplete or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Transport-level failure (connection refused, DNS, timeout, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("gateway returned status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        body: String,
    },

    /// The service answered with a body that could not be decoded.
    #[error("response decoding failed: {0}")]
    Decode(String),
}

/// Remote todo gateway abstraction.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a shared `Arc<dyn TodoGateway>`
/// can be captured into spawned effect tasks.
pub trait TodoGateway: Send + Sync {
    /// Fetch the current collection.
    ///
    /// Returns records in the service's display order; the caller preserves
    /// that order.
    fn list(&self) -> GatewayFuture<'_, Vec<TodoItem>>;

    /// Create a record from a candidate without an identifier.
    ///
    /// Returns the persisted record carrying the service-assigned identifier.
    fn create(&self, candidate: TodoItem) -> GatewayFuture<'_, TodoItem>;

    /// Update the record with the given identifier.
    ///
    /// Returns the authoritative post-update record. Callers apply the echo,
    /// never their locally-constructed guess.
    fn update(&self, id: TodoId, record: TodoItem) -> GatewayFuture<'_, TodoItem>;

    /// Delete the record with the given identifier.
    ///
    /// No payload on success.
    fn delete(&self, id: TodoId) -> GatewayFuture<'_, ()>;
}
