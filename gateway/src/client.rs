//! HTTP todo gateway implementation

use reqwest::Client;
use todo_sync_core::gateway::{GatewayError, GatewayFuture, TodoGateway};
use todo_sync_core::todo::{TodoId, TodoItem};

/// Environment variable holding the service base URL for [`HttpTodoGateway::from_env`]
pub const BASE_URL_ENV: &str = "TODO_API_BASE_URL";

/// HTTP client for the remote todo service
///
/// One instance per service; cheap to clone (the underlying `reqwest::Client`
/// is an `Arc` internally).
#[derive(Clone)]
pub struct HttpTodoGateway {
    client: Client,
    base_url: String,
}

impl HttpTodoGateway {
    /// Create a new gateway with the base URL from the environment
    ///
    /// Reads `TODO_API_BASE_URL`, e.g. `http://localhost:8080/api`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Config`] if the variable is not set.
    pub fn from_env() -> Result<Self, GatewayError> {
        let base_url = std::env::var(BASE_URL_ENV)
            .map_err(|_| GatewayError::Config(format!("{BASE_URL_ENV} is not set")))?;

        Ok(Self::new(base_url))
    }

    /// Create a new gateway with an explicit base URL
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn todo_url(&self, id: TodoId) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    /// Decode a success response, or map a non-success status to an error
    async fn read_json<T>(response: reqwest::Response) -> Result<T, GatewayError>
    where
        T: serde::de::DeserializeOwned,
    {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| GatewayError::Decode(e.to_string()))
        } else {
            Err(Self::status_error(response).await)
        }
    }

    async fn status_error(response: reqwest::Response) -> GatewayError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        GatewayError::Status { status, body }
    }

    async fn list_todos(&self) -> Result<Vec<TodoItem>, GatewayError> {
        tracing::debug!(url = %self.todos_url(), "Fetching todo collection");

        let response = self
            .client
            .get(self.todos_url())
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn create_todo(&self, candidate: TodoItem) -> Result<TodoItem, GatewayError> {
        tracing::debug!(title = %candidate.title, "Creating todo");

        let response = self
            .client
            .post(self.todos_url())
            .json(&candidate)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn update_todo(&self, id: TodoId, record: TodoItem) -> Result<TodoItem, GatewayError> {
        tracing::debug!(%id, "Updating todo");

        let response = self
            .client
            .put(self.todo_url(id))
            .json(&record)
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        Self::read_json(response).await
    }

    async fn delete_todo(&self, id: TodoId) -> Result<(), GatewayError> {
        tracing::debug!(%id, "Deleting todo");

        let response = self
            .client
            .delete(self.todo_url(id))
            .send()
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::status_error(response).await)
        }
    }
}

impl TodoGateway for HttpTodoGateway {
    fn list(&self) -> GatewayFuture<'_, Vec<TodoItem>> {
        Box::pin(self.list_todos())
    }

    fn create(&self, candidate: TodoItem) -> GatewayFuture<'_, TodoItem> {
        Box::pin(self.create_todo(candidate))
    }

    fn update(&self, id: TodoId, record: TodoItem) -> GatewayFuture<'_, TodoItem> {
        Box::pin(self.update_todo(id, record))
    }

    fn delete(&self, id: TodoId) -> GatewayFuture<'_, ()> {
        Box::pin(self.delete_todo(id))
    }
}
