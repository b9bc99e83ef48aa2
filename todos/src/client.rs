//! HTTP client for the todo API.
//!
//! Routes:
//! - `GET  {base}/fakeApi/todos` returns `{"todos": [Todo, ...]}`
//! - `POST {base}/fakeApi/todos` with `{"todo": {"text": ...}}` returns `{"todo": Todo}`

use crate::environment::{ApiFuture, TodoApi};
use crate::error::ApiError;
use crate::types::Todo;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Path of the todos collection
pub const TODOS_PATH: &str = "/fakeApi/todos";

/// Response body of `GET /fakeApi/todos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodosResponse {
    /// Every todo
    pub todos: Vec<Todo>,
}

/// Request body of `POST /fakeApi/todos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodoRequest {
    /// The todo to create
    pub todo: NewTodo,
}

/// A todo before the server has assigned its id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    /// What to do
    pub text: String,
}

/// Response body of `POST /fakeApi/todos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoResponse {
    /// The created todo
    pub todo: Todo,
}

/// Todo API over HTTP
#[derive(Clone, Debug)]
pub struct HttpTodoApi {
    client: Client,
    base_url: String,
}

impl HttpTodoApi {
    /// Create a client for the API at `base_url` (e.g. `http://127.0.0.1:3000`)
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Create a client reusing an existing `reqwest::Client`
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The API base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn todos_url(&self) -> String {
        format!("{}{TODOS_PATH}", self.base_url)
    }

    /// Fetch every todo
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or parsing failures
    pub async fn get_todos(&self) -> Result<Vec<Todo>, ApiError> {
        tracing::debug!(url = %self.todos_url(), "GET todos");

        let response = self
            .client
            .get(self.todos_url())
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let body: TodosResponse = parse(response).await?;
        Ok(body.todos)
    }

    /// Create a todo
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, non-success statuses, or parsing failures
    pub async fn post_todo(&self, text: String) -> Result<Todo, ApiError> {
        tracing::debug!(url = %self.todos_url(), "POST todo");

        let request = CreateTodoRequest {
            todo: NewTodo { text },
        };

        let response = self
            .client
            .post(self.todos_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        let body: TodoResponse = parse(response).await?;
        Ok(body.todo)
    }
}

async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    match response.status() {
        StatusCode::OK | StatusCode::CREATED => response
            .json::<T>()
            .await
            .map_err(|e| ApiError::ResponseParseFailed(e.to_string())),
        status => {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                status: status.as_u16(),
                message: body,
            })
        },
    }
}

impl TodoApi for HttpTodoApi {
    fn fetch_todos(&self) -> ApiFuture<'_, Vec<Todo>> {
        Box::pin(self.get_todos())
    }

    fn create_todo(&self, text: String) -> ApiFuture<'_, Todo> {
        Box::pin(self.post_todo(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpTodoApi::new("http://localhost:3000/");
        assert_eq!(api.todos_url(), "http://localhost:3000/fakeApi/todos");
    }

    #[test]
    fn request_body_shape() {
        let body = CreateTodoRequest {
            todo: NewTodo {
                text: "milk".to_string(),
            },
        };

        assert_eq!(serde_json::to_value(body).unwrap(), json!({"todo": {"text": "milk"}}));
    }

    #[tokio::test]
    async fn unreachable_server_is_request_failure() {
        let api = HttpTodoApi::new("http://127.0.0.1:9");

        let result = api.fetch_todos().await;

        assert!(matches!(result, Err(ApiError::RequestFailed(_))));
    }
}
