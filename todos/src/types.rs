//! Domain types for the to-do list.
//!
//! The state tree has two slices: [`TodosState`] (the records and their
//! loading status) and [`FilterState`] (what the list view shows). Both keep
//! their collections behind `Arc` so that a transition which changes nothing
//! leaves the collection pointer-equal to the previous one.

use crate::error::TodoError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use todolist_core::selector::InputKey;

/// Identifier of a todo, assigned by the data source
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoId(u64);

impl TodoId {
    /// Wrap a raw id
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// The raw id
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
///
/// Records are not edited in place: transitions build a replacement with
/// [`Todo::toggled`], [`Todo::with_color`] or [`Todo::completed`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Identifier
    pub id: TodoId,
    /// What to do
    pub text: String,
    /// Whether it's done
    #[serde(default)]
    pub completed: bool,
    /// Color tag, empty when untagged
    #[serde(default)]
    pub color: String,
}

impl Todo {
    /// Creates an open, untagged todo
    #[must_use]
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
            color: String::new(),
        }
    }

    /// A copy with `completed` flipped
    #[must_use]
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// A copy tagged with `color`
    #[must_use]
    pub fn with_color(&self, color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            ..self.clone()
        }
    }

    /// A copy marked done
    #[must_use]
    pub fn completed(&self) -> Self {
        Self {
            completed: true,
            ..self.clone()
        }
    }
}

/// Progress of the last load from the data source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingStatus {
    /// Nothing in flight
    #[default]
    Idle,
    /// A fetch is in flight
    Loading,
    /// The last fetch failed
    Failed,
}

/// The todos slice of the state tree
///
/// Every key of `entities` equals the id of the record stored under it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodosState {
    /// Records keyed by id
    pub entities: Arc<BTreeMap<TodoId, Todo>>,
    /// Loading status of the last fetch
    pub status: LoadingStatus,
    /// The last recoverable error, cleared by the next successful edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_error: Option<TodoError>,
}

impl TodosState {
    /// A slice holding `todos`, keyed by their ids
    #[must_use]
    pub fn with_todos(todos: impl IntoIterator<Item = Todo>) -> Self {
        Self {
            entities: Arc::new(todos.into_iter().map(|todo| (todo.id, todo)).collect()),
            ..Self::default()
        }
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.entities.get(&id)
    }

    /// Number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.entities.len()
    }

    /// Number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.entities.values().filter(|todo| todo.completed).count()
    }
}

/// Which completion states the list shows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every todo
    #[default]
    All,
    /// Open todos only
    Active,
    /// Done todos only
    Completed,
}

impl StatusFilter {
    /// Every filter, in display order
    pub const ALL: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Returns true if a todo with this completion flag passes the filter
    #[must_use]
    pub const fn matches(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Active => !completed,
            Self::Completed => completed,
        }
    }
}

impl InputKey for StatusFilter {
    fn same_input(&self, other: &Self) -> bool {
        self == other
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// The filters slice of the state tree
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Completion filter
    pub status: StatusFilter,
    /// Colors to show; empty shows every color
    pub colors: Arc<BTreeSet<String>>,
}

impl FilterState {
    /// Returns true if a todo with this color passes the color filter
    #[must_use]
    pub fn shows_color(&self, color: &str) -> bool {
        self.colors.is_empty() || self.colors.contains(color)
    }
}

/// The whole state tree
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    /// Todos slice
    pub todos: TodosState,
    /// Filters slice
    pub filters: FilterState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_defaults_when_fields_missing() {
        let todo: Todo = serde_json::from_str(r#"{"id":3,"text":"water plants"}"#).unwrap();

        assert_eq!(todo, Todo::new(TodoId::new(3), "water plants"));
    }

    #[test]
    fn replacement_builders_leave_original_alone() {
        let todo = Todo::new(TodoId::new(1), "milk");

        let toggled = todo.toggled();
        let tagged = todo.with_color("red");

        assert!(toggled.completed);
        assert_eq!(tagged.color, "red");
        assert!(!todo.completed);
        assert!(todo.color.is_empty());
        assert!(todo.toggled().toggled() == todo);
    }

    #[test]
    fn state_tree_json_shape() {
        let state = AppState {
            todos: TodosState::with_todos([Todo::new(TodoId::new(1), "milk").with_color("blue")]),
            filters: FilterState::default(),
        };

        let json = serde_json::to_value(&state).unwrap();

        assert_eq!(json["todos"]["status"], "idle");
        assert_eq!(json["todos"]["entities"]["1"]["color"], "blue");
        assert_eq!(json["filters"]["status"], "all");
        assert_eq!(json["filters"]["colors"], serde_json::json!([]));

        let back: AppState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn status_filter_matches() {
        assert!(StatusFilter::All.matches(true));
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Active.matches(false));
        assert!(!StatusFilter::Active.matches(true));
        assert!(StatusFilter::Completed.matches(true));
        assert_eq!(StatusFilter::Completed.to_string(), "completed");
    }

    #[test]
    fn counts() {
        let state = TodosState::with_todos([
            Todo::new(TodoId::new(1), "a"),
            Todo::new(TodoId::new(2), "b").completed(),
        ]);

        assert_eq!(state.count(), 2);
        assert_eq!(state.completed_count(), 1);
        assert_eq!(state.get(TodoId::new(2)).map(|t| t.text.as_str()), Some("b"));
    }
}
