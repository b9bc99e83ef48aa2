//! Reducer for the todos slice.
//!
//! Entity edits go through `Arc::make_mut` only when something actually
//! changes, so an edit that changes nothing (deleting an absent id, completing
//! an already complete list) keeps the entities map pointer-equal.

use crate::actions::AppAction;
use crate::environment::AppEnvironment;
use crate::error::TodoError;
use crate::types::{LoadingStatus, Todo, TodoId, TodosState};
use std::sync::Arc;
use todolist_core::{async_effect, effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Reducer for the todos slice
#[derive(Clone, Debug, Default)]
pub struct TodosReducer;

impl TodosReducer {
    /// Creates a new `TodosReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn insert(state: &mut TodosState, todo: Todo) {
        if state.entities.get(&todo.id) != Some(&todo) {
            Arc::make_mut(&mut state.entities).insert(todo.id, todo);
        }
        state.last_error = None;
    }

    /// Replace the record under `id` with `update(record)`
    fn replace(state: &mut TodosState, id: TodoId, update: impl FnOnce(&Todo) -> Todo) {
        let Some(current) = state.entities.get(&id) else {
            tracing::warn!(todo_id = %id, "Todo not found");
            state.last_error = Some(TodoError::NotFound(id));
            return;
        };

        let next = update(current);
        if next != *current {
            Arc::make_mut(&mut state.entities).insert(id, next);
        }
        state.last_error = None;
    }

    fn delete(state: &mut TodosState, id: TodoId) {
        if state.entities.contains_key(&id) {
            Arc::make_mut(&mut state.entities).remove(&id);
            state.last_error = None;
        }
    }

    fn complete_all(state: &mut TodosState) {
        if state.entities.values().all(|todo| todo.completed) {
            return;
        }

        for todo in Arc::make_mut(&mut state.entities).values_mut() {
            if !todo.completed {
                *todo = todo.completed();
            }
        }
        state.last_error = None;
    }

    fn clear_completed(state: &mut TodosState) {
        if !state.entities.values().any(|todo| todo.completed) {
            return;
        }

        Arc::make_mut(&mut state.entities).retain(|_, todo| !todo.completed);
        state.last_error = None;
    }

    fn load(state: &mut TodosState, todos: Vec<Todo>) {
        state.entities = Arc::new(todos.into_iter().map(|todo| (todo.id, todo)).collect());
        state.status = LoadingStatus::Idle;
        state.last_error = None;
    }

    /// One fetch, answered by `TodosLoaded` or `TodosLoadFailed`
    fn fetch_effect(env: &AppEnvironment) -> Effect<AppAction> {
        let api = Arc::clone(&env.api);
        async_effect! {
            match api.fetch_todos().await {
                Ok(todos) => Some(AppAction::TodosLoaded(todos)),
                Err(error) => Some(AppAction::TodosLoadFailed(error.to_string())),
            }
        }
    }

    /// One create, answered by `TodoAdded` or `TodoSaveFailed`
    fn save_effect(env: &AppEnvironment, text: String) -> Effect<AppAction> {
        let api = Arc::clone(&env.api);
        async_effect! {
            match api.create_todo(text).await {
                Ok(todo) => Some(AppAction::TodoAdded(todo)),
                Err(error) => Some(AppAction::TodoSaveFailed(error.to_string())),
            }
        }
    }
}

impl Reducer for TodosReducer {
    type State = TodosState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Events ==========
            AppAction::TodoAdded(todo) => Self::insert(state, todo),
            AppAction::TodoToggled(id) => Self::replace(state, id, Todo::toggled),
            AppAction::TodoColorSelected { todo_id, color } => {
                Self::replace(state, todo_id, |todo| todo.with_color(color));
            },
            AppAction::TodoDeleted(id) => Self::delete(state, id),
            AppAction::AllTodosCompleted => Self::complete_all(state),
            AppAction::CompletedTodosCleared => Self::clear_completed(state),
            AppAction::TodosLoading => state.status = LoadingStatus::Loading,
            AppAction::TodosLoaded(todos) => Self::load(state, todos),
            AppAction::TodosLoadFailed(message) => {
                tracing::warn!(error = %message, "Loading todos failed");
                state.status = LoadingStatus::Failed;
                state.last_error = Some(TodoError::LoadFailed(message));
            },
            AppAction::TodoSaveFailed(message) => {
                tracing::warn!(error = %message, "Saving todo failed");
                state.last_error = Some(TodoError::SaveFailed(message));
            },

            // ========== Commands ==========
            AppAction::FetchTodos => {
                state.status = LoadingStatus::Loading;
                return smallvec![Self::fetch_effect(env)];
            },
            AppAction::SaveNewTodo { text } => {
                let text = text.trim();
                if text.is_empty() {
                    state.last_error = Some(TodoError::EmptyText);
                    return SmallVec::new();
                }
                return smallvec![Self::save_effect(env, text.to_string())];
            },

            // Filters and unknown actions
            AppAction::StatusFilterChanged(_)
            | AppAction::ColorFilterChanged { .. }
            | AppAction::Unknown => {},
        }

        SmallVec::new()
    }
}
