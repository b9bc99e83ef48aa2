//! Error types for the to-do list

use crate::types::TodoId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from talking to the todo API
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response parsing failed
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// API returned an error
    #[error("API error (status {status}): {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Error message from API
        message: String,
    },
}

/// Recoverable errors recorded in [`TodosState::last_error`](crate::types::TodosState)
///
/// These never abort a transition; they sit in state until the next
/// successful edit so a view can show them.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "camelCase")]
pub enum TodoError {
    /// A toggle or recolor named an id that isn't in the list
    #[error("Todo {0} not found")]
    NotFound(TodoId),

    /// Fetching the list failed
    #[error("Loading todos failed: {0}")]
    LoadFailed(String),

    /// Creating a todo failed
    #[error("Saving todo failed: {0}")]
    SaveFailed(String),

    /// A new todo had no text
    #[error("Todo text cannot be empty")]
    EmptyText,
}
