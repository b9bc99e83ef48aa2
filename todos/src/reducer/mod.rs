//! Reducers for the to-do list.
//!
//! [`AppReducer`] is the root: it scopes [`TodosReducer`] to `state.todos`
//! and [`FiltersReducer`] to `state.filters` and runs both for every action.
//! Each slice reducer ignores actions it doesn't handle, so a slice that
//! wasn't touched keeps its identity.

mod filters;
mod todos;

pub use filters::FiltersReducer;
pub use todos::TodosReducer;

use crate::actions::AppAction;
use crate::environment::AppEnvironment;
use crate::types::{AppState, FilterState, TodosState};
use todolist_core::composition::{combine_reducers, scope_reducer, CombinedReducer};
use todolist_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Root reducer for [`AppState`]
#[derive(Clone)]
pub struct AppReducer {
    inner: CombinedReducer<AppState, AppAction, AppEnvironment>,
}

impl AppReducer {
    /// Creates the root reducer from the slice reducers
    #[must_use]
    pub fn new() -> Self {
        let inner = combine_reducers(vec![
            Box::new(scope_reducer(
                TodosReducer::new(),
                |state: &AppState| &state.todos,
                |state: &mut AppState, todos: TodosState| state.todos = todos,
            )),
            Box::new(scope_reducer(
                FiltersReducer::new(),
                |state: &AppState| &state.filters,
                |state: &mut AppState, filters: FilterState| state.filters = filters,
            )),
        ]);

        Self { inner }
    }
}

impl Default for AppReducer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppReducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppReducer")
            .field("slices", &self.inner.len())
            .finish()
    }
}

impl Reducer for AppReducer {
    type State = AppState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        self.inner.reduce(state, action, env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::ColorChange;
    use crate::mocks::MockTodoApi;
    use crate::types::{LoadingStatus, StatusFilter, Todo, TodoId};
    use std::sync::Arc;
    use todolist_testing::{assertions, ReducerTest};

    fn test_env() -> AppEnvironment {
        AppEnvironment::new(Arc::new(MockTodoApi::new()))
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();

        assert!(state.todos.entities.is_empty());
        assert_eq!(state.todos.status, LoadingStatus::Idle);
        assert_eq!(state.filters.status, StatusFilter::All);
        assert!(state.filters.colors.is_empty());
    }

    #[test]
    fn test_actions_reach_their_slice() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_actions([
                AppAction::TodoAdded(Todo::new(TodoId::new(1), "milk")),
                AppAction::StatusFilterChanged(StatusFilter::Active),
                AppAction::color_filter_changed("red", ColorChange::Added),
            ])
            .then_state(|state| {
                assert_eq!(state.todos.count(), 1);
                assert_eq!(state.filters.status, StatusFilter::Active);
                assert!(state.filters.colors.contains("red"));
            })
            .then_effects(assertions::assert_no_effects)
            .run();
    }

    #[test]
    fn test_untouched_slice_keeps_identity() {
        let reducer = AppReducer::new();
        let env = test_env();
        let mut state = AppState::default();
        let _ = reducer.reduce(&mut state, AppAction::TodoAdded(Todo::new(TodoId::new(1), "milk")), &env);

        let entities = Arc::clone(&state.todos.entities);
        let colors = Arc::clone(&state.filters.colors);

        let _ = reducer.reduce(&mut state, AppAction::color_filter_changed("red", ColorChange::Added), &env);
        assert!(Arc::ptr_eq(&entities, &state.todos.entities));

        let _ = reducer.reduce(&mut state, AppAction::TodoToggled(TodoId::new(1)), &env);
        assert!(!Arc::ptr_eq(&entities, &state.todos.entities));
        assert!(!Arc::ptr_eq(&colors, &state.filters.colors));
    }

    #[test]
    fn test_unknown_action_is_identity() {
        let reducer = AppReducer::new();
        let mut state = AppState::default();
        let _ = reducer.reduce(&mut state, AppAction::TodoAdded(Todo::new(TodoId::new(3), "x")), &test_env());
        let before = state.clone();

        let effects = reducer.reduce(&mut state, AppAction::from_json(r#"{"type":"todos/unknown"}"#), &test_env());

        assert!(effects.is_empty());
        assert_eq!(state, before);
        assert!(Arc::ptr_eq(&state.todos.entities, &before.todos.entities));
        assert!(Arc::ptr_eq(&state.filters.colors, &before.filters.colors));
    }

    #[test]
    fn test_fetch_through_root_yields_one_effect() {
        ReducerTest::new(AppReducer::new())
            .with_env(test_env())
            .given_state(AppState::default())
            .when_action(AppAction::FetchTodos)
            .then_state(|state| {
                assert_eq!(state.todos.status, LoadingStatus::Loading);
            })
            .then_effects(|effects| {
                assertions::assert_effects_count(effects, 1);
                assertions::assert_has_future_effect(effects);
            })
            .run();
    }
}
