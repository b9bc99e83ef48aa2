//! Reducer for the filters slice.

use crate::actions::{AppAction, ColorChange};
use crate::environment::AppEnvironment;
use crate::types::FilterState;
use std::sync::Arc;
use todolist_core::{effect::Effect, reducer::Reducer, SmallVec};

/// Reducer for the filters slice
#[derive(Clone, Debug, Default)]
pub struct FiltersReducer;

impl FiltersReducer {
    /// Creates a new `FiltersReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn change_color(state: &mut FilterState, color: String, change: &ColorChange) {
        match change {
            ColorChange::Added => {
                if !state.colors.contains(&color) {
                    Arc::make_mut(&mut state.colors).insert(color);
                }
            },
            ColorChange::Removed => {
                if state.colors.contains(&color) {
                    Arc::make_mut(&mut state.colors).remove(&color);
                }
            },
            ColorChange::Unknown(kind) => {
                tracing::debug!(change_type = %kind, %color, "Ignoring unknown color filter change");
            },
        }
    }
}

impl Reducer for FiltersReducer {
    type State = FilterState;
    type Action = AppAction;
    type Environment = AppEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            AppAction::StatusFilterChanged(status) => state.status = status,
            AppAction::ColorFilterChanged { color, change_type } => {
                Self::change_color(state, color, &change_type);
            },
            _ => {},
        }

        SmallVec::new()
    }
}
