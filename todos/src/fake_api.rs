//! In-memory todo backend.
//!
//! Serves the two routes [`HttpTodoApi`](crate::client::HttpTodoApi) talks
//! to, backed by a seeded in-memory list. Ids are assigned in increasing
//! order. Nothing is persisted.

use crate::client::{CreateTodoRequest, TodoResponse, TodosResponse, TODOS_PATH};
use crate::types::{Todo, TodoId};
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// Backing store of the fake API
#[derive(Debug)]
pub struct FakeDb {
    todos: Vec<Todo>,
    next_id: u64,
}

impl FakeDb {
    /// A database holding `todos`
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|todo| todo.id.get()).max().unwrap_or(0) + 1;
        Self { todos, next_id }
    }

    /// A database with a few sample todos
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_todos(vec![
            Todo::new(TodoId::new(1), "Learn the reducer pattern").completed(),
            Todo::new(TodoId::new(2), "Wire up the store").with_color("blue"),
            Todo::new(TodoId::new(3), "Write selectors"),
        ])
    }

    fn insert(&mut self, text: String) -> Todo {
        let todo = Todo::new(TodoId::new(self.next_id), text);
        self.next_id += 1;
        self.todos.push(todo.clone());
        todo
    }
}

type SharedDb = Arc<Mutex<FakeDb>>;

/// Router serving `db`
pub fn router(db: FakeDb) -> Router {
    Router::new()
        .route(TODOS_PATH, get(list_todos).post(create_todo))
        .with_state(Arc::new(Mutex::new(db)))
}

#[tracing::instrument(skip(db))]
async fn list_todos(State(db): State<SharedDb>) -> Json<TodosResponse> {
    let todos = db.lock().await.todos.clone();
    tracing::debug!(count = todos.len(), "Listing todos");
    Json(TodosResponse { todos })
}

#[tracing::instrument(skip(db, request))]
async fn create_todo(
    State(db): State<SharedDb>,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<TodoResponse>), (StatusCode, String)> {
    let text = request.todo.text.trim().to_string();
    if text.is_empty() {
        return Err((StatusCode::UNPROCESSABLE_ENTITY, "todo text is empty".to_string()));
    }

    let todo = db.lock().await.insert(text);
    tracing::debug!(todo_id = %todo.id, "Created todo");
    Ok((StatusCode::CREATED, Json(TodoResponse { todo })))
}

/// Bind `addr` and serve `db` in a background task
///
/// Returns the bound address (useful with port 0) and the server task.
///
/// # Errors
///
/// Returns an error if the address cannot be bound.
pub async fn spawn(
    addr: SocketAddr,
    db: FakeDb,
) -> std::io::Result<(SocketAddr, tokio::task::JoinHandle<std::io::Result<()>>)> {
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(%local_addr, "Fake todo API listening");

    let task = tokio::spawn(async move { axum::serve(listener, router(db)).await });
    Ok((local_addr, task))
}
