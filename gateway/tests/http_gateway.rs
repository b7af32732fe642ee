//! HTTP-level tests for `HttpTodoGateway` against a mock server
//!
//! Each test mounts the exact request shape the REST resource expects and
//! verifies both the request mapping and the response handling.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use serde_json::json;
use todo_sync_core::gateway::{GatewayError, TodoGateway};
use todo_sync_core::todo::{TodoId, TodoItem};
use todo_sync_gateway::HttpTodoGateway;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn list_fetches_collection_in_service_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 2, "title": "Write docs", "completed": false },
            { "id": 1, "title": "Buy milk", "completed": true },
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpTodoGateway::new(server.uri());
    let todos = gateway.list().await.unwrap();

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].id, Some(TodoId::new(2)));
    assert_eq!(todos[0].title, "Write docs");
    assert_eq!(todos[1].id, Some(TodoId::new(1)));
    assert!(todos[1].completed);
}

#[tokio::test]
async fn create_posts_candidate_without_id() {
    let server = MockServer::start().await;

    // The candidate must not carry an id field; the service assigns one
    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(body_json(json!({ "title": "Buy milk", "completed": false })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!(
            { "id": 5, "title": "Buy milk", "completed": false }
        )))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpTodoGateway::new(server.uri());
    let created = gateway
        .create(TodoItem::candidate("Buy milk".to_string()))
        .await
        .unwrap();

    assert_eq!(created.id, Some(TodoId::new(5)));
    assert_eq!(created.title, "Buy milk");
}

#[tokio::test]
async fn update_puts_record_and_returns_echo() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/todos/5"))
        .and(body_json(json!(
            { "id": 5, "title": "Buy milk", "completed": true }
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(
            // The service may normalize fields; the echo is authoritative
            { "id": 5, "title": "Buy milk", "completed": true }
        )))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpTodoGateway::new(server.uri());
    let record = TodoItem {
        id: Some(TodoId::new(5)),
        title: "Buy milk".to_string(),
        completed: true,
    };
    let updated = gateway.update(TodoId::new(5), record).await.unwrap();

    assert_eq!(updated.id, Some(TodoId::new(5)));
    assert!(updated.completed);
}

#[tokio::test]
async fn delete_targets_record_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpTodoGateway::new(server.uri());
    gateway.delete(TodoId::new(9)).await.unwrap();
}

#[tokio::test]
async fn non_success_status_becomes_gateway_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;

    let gateway = HttpTodoGateway::new(server.uri());
    let err = gateway.list().await.unwrap_err();

    match err {
        GatewayError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "database down");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_becomes_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let gateway = HttpTodoGateway::new(server.uri());
    let err = gateway.list().await.unwrap_err();

    assert!(matches!(err, GatewayError::Decode(_)));
}

#[tokio::test]
async fn connection_failure_becomes_request_error() {
    // Nothing is listening on this port
    let gateway = HttpTodoGateway::new("http://127.0.0.1:1");
    let err = gateway.list().await.unwrap_err();

    assert!(matches!(err, GatewayError::Request(_)));
}
