//! Reducer composition utilities
//!
//! - **`combine_reducers`**: Run several reducers over the same state and action
//! - **`scope_reducer`**: Focus a reducer on one slice of a larger state
//!
//! Together they build a root reducer out of per-domain reducers: each domain
//! reducer is scoped to its slice of the root state, and the scoped reducers
//! are combined so every action reaches every slice.
//!
//! # Example
//!
//! ```
//! use todolist_core::composition::{combine_reducers, scope_reducer};
//! use todolist_core::{smallvec, Effect, Reducer, SmallVec};
//!
//! #[derive(Clone)]
//! enum Action {
//!     Bump,
//!     Rename(String),
//! }
//!
//! #[derive(Clone, Default)]
//! struct Counter {
//!     count: u32,
//! }
//!
//! #[derive(Clone, Default)]
//! struct Label {
//!     text: String,
//! }
//!
//! #[derive(Clone, Default)]
//! struct Root {
//!     counter: Counter,
//!     label: Label,
//! }
//!
//! struct CounterReducer;
//! struct LabelReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = Counter;
//!     type Action = Action;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Counter, action: Action, _env: &()) -> SmallVec<[Effect<Action>; 4]> {
//!         if matches!(action, Action::Bump) {
//!             state.count += 1;
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! impl Reducer for LabelReducer {
//!     type State = Label;
//!     type Action = Action;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut Label, action: Action, _env: &()) -> SmallVec<[Effect<Action>; 4]> {
//!         if let Action::Rename(text) = action {
//!             state.text = text;
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(CounterReducer, |r: &Root| &r.counter, |r: &mut Root, c| r.counter = c)),
//!     Box::new(scope_reducer(LabelReducer, |r: &Root| &r.label, |r: &mut Root, l| r.label = l)),
//! ]);
//!
//! let mut state = Root::default();
//! let _ = root.reduce(&mut state, Action::Bump, &());
//! let _ = root.reduce(&mut state, Action::Rename("groceries".to_string()), &());
//! assert_eq!(state.counter.count, 1);
//! assert_eq!(state.label.text, "groceries");
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;
use std::sync::Arc;

/// A shareable, type-erased reducer
pub type SharedReducer<S, A, E> = Arc<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in order, and all effects are collected and concatenated.
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E> + Send + Sync>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer {
        reducers: reducers.into_iter().map(Arc::from).collect(),
    }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`]. Cloning is cheap: the inner reducers are shared.
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<SharedReducer<S, A, E>>,
}

impl<S, A, E> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    /// Number of reducers in the combination
    #[must_use]
    pub fn len(&self) -> usize {
        self.reducers.len()
    }

    /// Returns true if nothing was combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reducers.is_empty()
    }
}

impl<S, A, E> Clone for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    fn clone(&self) -> Self {
        Self {
            reducers: self.reducers.iter().map(Arc::clone).collect(),
        }
    }
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut all_effects = SmallVec::new();

        for reducer in &self.reducers {
            let effects = reducer.reduce(state, action.clone(), env);
            all_effects.extend(effects.into_iter().filter(|effect| !effect.is_none()));
        }

        all_effects
    }
}

/// Scopes a reducer to operate on a slice of a larger state.
///
/// The slice is cloned out, reduced, and written back. Slices built from
/// `Arc`-backed collections keep their identity across the round trip, so
/// a reducer that leaves its slice alone leaves pointer identity intact.
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a slice of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<fn() -> (A, E)>,
}

impl<S, SubS, A, E, R> Clone for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            get_state: self.get_state,
            set_state: self.set_state,
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let mut sub_state = (self.get_state)(state).clone();

        let effects = self.reducer.reduce(&mut sub_state, action, env);

        (self.set_state)(state, sub_state);

        effects
    }
}
