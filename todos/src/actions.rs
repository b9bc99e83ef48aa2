//! Actions: everything that can happen to the state tree.
//!
//! One closed enum covers both slices. On the wire an action is
//! `{"type": "<domain>/<name>", "payload": ...}`; the type strings below are
//! the public vocabulary shared with any client that sends actions as JSON.
//!
//! Commands (`#[command]`) start asynchronous work and are answered later by
//! an event. Events (`#[event]`) are facts the reducers record.

use crate::types::{StatusFilter, Todo, TodoId};
use serde::{Deserialize, Serialize};
use todolist_macros::Action;

/// How a color filter changes
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorChange {
    /// Start showing the color
    Added,
    /// Stop showing the color
    Removed,
    /// Any other change kind; ignored by the filters reducer
    Unknown(String),
}

impl From<String> for ColorChange {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "added" => Self::Added,
            "removed" => Self::Removed,
            _ => Self::Unknown(kind),
        }
    }
}

impl From<ColorChange> for String {
    fn from(change: ColorChange) -> Self {
        match change {
            ColorChange::Added => "added".to_string(),
            ColorChange::Removed => "removed".to_string(),
            ColorChange::Unknown(kind) => kind,
        }
    }
}

/// Every action the store accepts
#[derive(Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum AppAction {
    // ========== Todos: events ==========
    /// A todo was added (or replaced, if the id exists)
    #[event]
    #[serde(rename = "todos/todoAdded")]
    TodoAdded(Todo),

    /// A todo's completion flag was flipped
    #[event]
    #[serde(rename = "todos/todoToggled")]
    TodoToggled(TodoId),

    /// A todo was tagged with a color
    #[event]
    #[serde(rename = "todos/colorSelected")]
    TodoColorSelected {
        /// Todo to tag
        #[serde(rename = "todoId")]
        todo_id: TodoId,
        /// New color, empty to untag
        color: String,
    },

    /// A todo was deleted
    #[event]
    #[serde(rename = "todos/todoDeleted")]
    TodoDeleted(TodoId),

    /// Every todo was marked done
    #[event]
    #[serde(rename = "todos/allCompleted")]
    AllTodosCompleted,

    /// Every done todo was removed
    #[event]
    #[serde(rename = "todos/completedCleared")]
    CompletedTodosCleared,

    /// A fetch started
    #[event]
    #[serde(rename = "todos/todosLoading")]
    TodosLoading,

    /// A fetch returned the full list
    #[event]
    #[serde(rename = "todos/todosLoaded")]
    TodosLoaded(Vec<Todo>),

    /// A fetch failed
    #[event]
    #[serde(rename = "todos/todosLoadFailed")]
    TodosLoadFailed(String),

    /// Creating a todo failed
    #[event]
    #[serde(rename = "todos/todoSaveFailed")]
    TodoSaveFailed(String),

    // ========== Todos: commands ==========
    /// Fetch the full list from the API
    #[command]
    #[serde(rename = "todos/fetchTodos")]
    FetchTodos,

    /// Create a todo through the API
    #[command]
    #[serde(rename = "todos/saveNewTodo")]
    SaveNewTodo {
        /// Text of the new todo
        text: String,
    },

    // ========== Filters ==========
    /// The status filter was replaced
    #[event]
    #[serde(rename = "filters/statusFilterChanged")]
    StatusFilterChanged(StatusFilter),

    /// A color was added to or removed from the color filter
    #[event]
    #[serde(rename = "filters/colorFilterChanged")]
    ColorFilterChanged {
        /// Color to add or remove
        color: String,
        /// Whether to add or remove it
        #[serde(rename = "changeType")]
        change_type: ColorChange,
    },

    /// An action with a type nobody handles
    #[serde(other)]
    Unknown,
}

impl AppAction {
    /// Decode an action from JSON
    ///
    /// Anything that isn't a well-formed action (unknown type, wrong payload,
    /// invalid JSON) decodes to [`AppAction::Unknown`], which every reducer
    /// ignores.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|error| {
            tracing::debug!(%error, "Undecodable action, treating as unknown");
            Self::Unknown
        })
    }

    /// Shorthand for [`AppAction::TodoColorSelected`]
    #[must_use]
    pub fn color_selected(todo_id: TodoId, color: impl Into<String>) -> Self {
        Self::TodoColorSelected {
            todo_id,
            color: color.into(),
        }
    }

    /// Shorthand for [`AppAction::ColorFilterChanged`]
    #[must_use]
    pub fn color_filter_changed(color: impl Into<String>, change_type: ColorChange) -> Self {
        Self::ColorFilterChanged {
            color: color.into(),
            change_type,
        }
    }

    /// Shorthand for [`AppAction::SaveNewTodo`]
    #[must_use]
    pub fn save_new_todo(text: impl Into<String>) -> Self {
        Self::SaveNewTodo { text: text.into() }
    }
}
