//! Property tests for the reducers and selectors.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use proptest::prelude::*;
use std::sync::Arc;
use todolist::mocks::MockTodoApi;
use todolist::{
    AppAction, AppEnvironment, AppReducer, AppState, ColorChange, StatusFilter, Todo, TodoId,
    TodoSelectors, TodosState,
};
use todolist_core::reducer::Reducer;

const COLORS: [&str; 4] = ["", "red", "green", "blue"];

fn env() -> AppEnvironment {
    AppEnvironment::new(Arc::new(MockTodoApi::new()))
}

fn todo_strategy() -> impl Strategy<Value = Todo> {
    (0u64..40, "[a-z]{1,8}", any::<bool>(), 0usize..COLORS.len()).prop_map(|(id, text, completed, color)| Todo {
        id: TodoId::new(id),
        text,
        completed,
        color: COLORS[color].to_string(),
    })
}

fn state_strategy() -> impl Strategy<Value = AppState> {
    (
        prop::collection::vec(todo_strategy(), 0..20),
        prop::sample::select(StatusFilter::ALL.to_vec()),
        prop::collection::btree_set(prop::sample::select(COLORS[1..].to_vec()), 0..3),
    )
        .prop_map(|(todos, status, colors)| {
            let mut state = AppState {
                todos: TodosState::with_todos(todos),
                ..AppState::default()
            };
            state.filters.status = status;
            state.filters.colors = Arc::new(colors.into_iter().map(ToString::to_string).collect());
            state
        })
}

fn action_strategy() -> impl Strategy<Value = AppAction> {
    prop_oneof![
        todo_strategy().prop_map(AppAction::TodoAdded),
        (0u64..40).prop_map(|id| AppAction::TodoToggled(TodoId::new(id))),
        (0u64..40, 0usize..COLORS.len())
            .prop_map(|(id, color)| AppAction::color_selected(TodoId::new(id), COLORS[color])),
        (0u64..40).prop_map(|id| AppAction::TodoDeleted(TodoId::new(id))),
        Just(AppAction::AllTodosCompleted),
        Just(AppAction::CompletedTodosCleared),
        prop::sample::select(StatusFilter::ALL.to_vec()).prop_map(AppAction::StatusFilterChanged),
        (0usize..COLORS.len()).prop_map(|color| AppAction::color_filter_changed(COLORS[color], ColorChange::Added)),
        (0usize..COLORS.len()).prop_map(|color| AppAction::color_filter_changed(COLORS[color], ColorChange::Removed)),
        Just(AppAction::Unknown),
    ]
}

proptest! {
    #[test]
    fn keys_always_match_record_ids(
        state in state_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..30),
    ) {
        let reducer = AppReducer::new();
        let env = env();
        let mut state = state;

        for action in actions {
            let effects = reducer.reduce(&mut state, action, &env);
            prop_assert!(effects.is_empty());
        }

        for (id, todo) in state.todos.entities.iter() {
            prop_assert_eq!(*id, todo.id);
        }
    }

    #[test]
    fn adding_a_color_twice_equals_adding_once(state in state_strategy(), color in 1usize..COLORS.len()) {
        let reducer = AppReducer::new();
        let env = env();
        let add = AppAction::color_filter_changed(COLORS[color], ColorChange::Added);

        let mut once = state.clone();
        let _ = reducer.reduce(&mut once, add.clone(), &env);
        let mut twice = state;
        let _ = reducer.reduce(&mut twice, add.clone(), &env);
        let _ = reducer.reduce(&mut twice, add, &env);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn complete_all_then_clear_leaves_nothing(state in state_strategy()) {
        let reducer = AppReducer::new();
        let env = env();
        let mut state = state;

        let _ = reducer.reduce(&mut state, AppAction::AllTodosCompleted, &env);
        let _ = reducer.reduce(&mut state, AppAction::CompletedTodosCleared, &env);

        prop_assert!(state.todos.entities.is_empty());
    }

    #[test]
    fn unknown_action_is_identity(state in state_strategy()) {
        let reducer = AppReducer::new();
        let before = state.clone();
        let mut state = state;

        let _ = reducer.reduce(&mut state, AppAction::Unknown, &env());

        prop_assert_eq!(&state, &before);
        prop_assert!(Arc::ptr_eq(&state.todos.entities, &before.todos.entities));
    }

    #[test]
    fn filtered_todos_agree_with_the_filters(state in state_strategy()) {
        let selectors = TodoSelectors::new();
        let filtered = selectors.filtered_todos(&state);
        let all = selectors.all_todos(&state);

        prop_assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

        let expected: Vec<Todo> = all
            .iter()
            .filter(|todo| state.filters.status.matches(todo.completed))
            .filter(|todo| state.filters.shows_color(&todo.color))
            .cloned()
            .collect();
        prop_assert_eq!(&*filtered, &expected);

        let ids: Vec<TodoId> = expected.iter().map(|todo| todo.id).collect();
        prop_assert_eq!(&*selectors.filtered_todo_ids(&state), &ids);
    }
}
