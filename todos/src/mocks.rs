//! Mock API for testing.
//!
//! An in-memory [`TodoApi`] with scripted failures and call counters, for
//! reducer and store tests that should not touch the network.

use crate::environment::{ApiFuture, TodoApi};
use crate::error::ApiError;
use crate::types::{Todo, TodoId};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Mock todo API.
///
/// Holds the todos in memory and assigns ids the way a server would.
#[derive(Debug, Default)]
pub struct MockTodoApi {
    todos: Mutex<Vec<Todo>>,
    next_id: AtomicU64,
    fetch_failure: Mutex<Option<ApiError>>,
    create_failure: Mutex<Option<ApiError>>,
    fetch_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

impl MockTodoApi {
    /// Create an empty mock API.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock API that serves `todos`.
    ///
    /// New todos get ids above the largest id served.
    #[must_use]
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|todo| todo.id.get()).max().unwrap_or(0);
        Self {
            todos: Mutex::new(todos),
            next_id: AtomicU64::new(next_id),
            ..Self::default()
        }
    }

    /// Make every fetch fail with `error`.
    #[must_use]
    pub fn failing_fetch(self, error: ApiError) -> Self {
        *lock(&self.fetch_failure) = Some(error);
        self
    }

    /// Make every create fail with `error`.
    #[must_use]
    pub fn failing_create(self, error: ApiError) -> Self {
        *lock(&self.create_failure) = Some(error);
        self
    }

    /// Number of `fetch_todos` calls so far.
    #[must_use]
    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    /// Number of `create_todo` calls so far.
    #[must_use]
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Todos currently held by the mock.
    #[must_use]
    pub fn todos(&self) -> Vec<Todo> {
        lock(&self.todos).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TodoApi for MockTodoApi {
    fn fetch_todos(&self) -> ApiFuture<'_, Vec<Todo>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        let result = match lock(&self.fetch_failure).clone() {
            Some(error) => Err(error),
            None => Ok(lock(&self.todos).clone()),
        };
        Box::pin(async move { result })
    }

    fn create_todo(&self, text: String) -> ApiFuture<'_, Todo> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let result = match lock(&self.create_failure).clone() {
            Some(error) => Err(error),
            None => {
                let id = TodoId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
                let todo = Todo::new(id, text);
                lock(&self.todos).push(todo.clone());
                Ok(todo)
            },
        };
        Box::pin(async move { result })
    }
}
