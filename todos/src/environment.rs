//! Injected dependencies for the reducers.

use crate::error::ApiError;
use crate::types::Todo;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Boxed future returned by [`TodoApi`] methods
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, ApiError>> + Send + 'a>>;

/// The network boundary: where todos are loaded from and created
///
/// Each call is made once. Implementations do not retry.
pub trait TodoApi: Send + Sync {
    /// Fetch every todo
    fn fetch_todos(&self) -> ApiFuture<'_, Vec<Todo>>;

    /// Create a todo with `text`; the data source assigns its id
    fn create_todo(&self, text: String) -> ApiFuture<'_, Todo>;
}

/// Environment shared by every reducer
#[derive(Clone)]
pub struct AppEnvironment {
    /// Todo API client
    pub api: Arc<dyn TodoApi>,
}

impl AppEnvironment {
    /// Creates a new `AppEnvironment`
    #[must_use]
    pub fn new(api: Arc<dyn TodoApi>) -> Self {
        Self { api }
    }
}

impl std::fmt::Debug for AppEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppEnvironment").finish_non_exhaustive()
    }
}
