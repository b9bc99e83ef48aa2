//! Derived data for the list view.
//!
//! [`TodoSelectors`] caches each derived list and recomputes it only when
//! the state it was derived from changes identity. Selectors compose: the
//! filtered list is derived from the cached full list, and the id lists from
//! their todo lists, so an unchanged input returns the very same `Arc`.
//!
//! Keep one `TodoSelectors` per view; views that share one overwrite each
//! other's cache entries.

use crate::types::{AppState, StatusFilter, Todo, TodoId};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use todolist_core::selector::Memo;

type Entities = Arc<BTreeMap<TodoId, Todo>>;
type FilterKey = (Arc<Vec<Todo>>, StatusFilter, Arc<BTreeSet<String>>);

/// Memoized selectors over [`AppState`]
#[derive(Debug, Default)]
pub struct TodoSelectors {
    all: Memo<Entities, Vec<Todo>>,
    ids: Memo<Arc<Vec<Todo>>, Vec<TodoId>>,
    filtered: Memo<FilterKey, Vec<Todo>>,
    filtered_ids: Memo<Arc<Vec<Todo>>, Vec<TodoId>>,
}

impl TodoSelectors {
    /// Creates selectors with empty caches
    #[must_use]
    pub const fn new() -> Self {
        Self {
            all: Memo::new(),
            ids: Memo::new(),
            filtered: Memo::new(),
            filtered_ids: Memo::new(),
        }
    }

    /// Every todo, in ascending id order
    pub fn all_todos(&self, state: &AppState) -> Arc<Vec<Todo>> {
        self.all
            .get_or_compute(Arc::clone(&state.todos.entities), |entities| entities.values().cloned().collect())
    }

    /// Ids of every todo, in ascending order
    pub fn todo_ids(&self, state: &AppState) -> Arc<Vec<TodoId>> {
        self.ids.get_or_compute(self.all_todos(state), |todos| ids_of(todos))
    }

    /// Todos passing both the status and the color filter
    ///
    /// With no filtering in effect this is the full list itself.
    pub fn filtered_todos(&self, state: &AppState) -> Arc<Vec<Todo>> {
        let key = (
            self.all_todos(state),
            state.filters.status,
            Arc::clone(&state.filters.colors),
        );

        self.filtered.get_or_compute_shared(key, |(todos, status, colors)| {
            if *status == StatusFilter::All && colors.is_empty() {
                return Arc::clone(todos);
            }

            Arc::new(
                todos
                    .iter()
                    .filter(|todo| status.matches(todo.completed))
                    .filter(|todo| colors.is_empty() || colors.contains(&todo.color))
                    .cloned()
                    .collect(),
            )
        })
    }

    /// Ids of the filtered todos
    pub fn filtered_todo_ids(&self, state: &AppState) -> Arc<Vec<TodoId>> {
        self.filtered_ids
            .get_or_compute(self.filtered_todos(state), |todos| ids_of(todos))
    }

    /// Look up one todo
    #[must_use]
    pub fn todo_by_id(state: &AppState, id: TodoId) -> Option<&Todo> {
        state.todos.entities.get(&id)
    }

    /// Number of todos not yet done
    pub fn remaining_count(&self, state: &AppState) -> usize {
        self.all_todos(state).iter().filter(|todo| !todo.completed).count()
    }

    /// Drop every cached value; the next read of each selector recomputes
    pub fn invalidate(&self) {
        self.all.invalidate();
        self.ids.invalidate();
        self.filtered.invalidate();
        self.filtered_ids.invalidate();
    }

    /// How many times each cache has been computed, as
    /// `(all, ids, filtered, filtered_ids)`
    #[must_use]
    pub fn recomputations(&self) -> (u64, u64, u64, u64) {
        (
            self.all.recomputations(),
            self.ids.recomputations(),
            self.filtered.recomputations(),
            self.filtered_ids.recomputations(),
        )
    }
}

fn ids_of(todos: &[Todo]) -> Vec<TodoId> {
    todos.iter().map(|todo| todo.id).collect()
}
