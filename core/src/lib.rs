//! # Todolist Core
//!
//! Core traits and types for a centralized, reducer-based state store.
//!
//! A single state tree is owned by a store (see `todolist-runtime`). Every
//! change to it is described by an action and applied by a reducer; derived
//! views are computed by memoized selectors.
//!
//! ## Core Concepts
//!
//! - **State**: Owned, `Clone`-able domain data
//! - **Action**: A closed enum of everything that can happen
//! - **Reducer**: `(State, Action, Environment) → (State, Effects)`
//! - **Effect**: A description of asynchronous work whose result is fed back as an action
//! - **Environment**: Injected dependencies (API clients and the like)
//! - **Selector**: A derived view of state, cached by input identity
//!
//! ## Example
//!
//! ```
//! use todolist_core::{Effect, Reducer, SmallVec, smallvec};
//!
//! #[derive(Clone, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Reset => state.count = 0,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! let _ = CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

pub use smallvec::{smallvec, SmallVec};

/// Reducer composition (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// Macros for building effects
pub mod effect_macros;

/// Memoization for derived data
pub mod selector;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → (State, Effects)`.
/// They are deterministic and testable without a runtime.
pub mod reducer {
    use super::effect::Effect;
    use smallvec::SmallVec;

    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Type Parameters
    ///
    /// - `State`: The state slice this reducer owns
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// Reducers must not perform I/O. Work that needs I/O is returned as an
    /// [`Effect`] and executed by the store, which feeds the resulting action
    /// back through the reducer.
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes and effects
        ///
        /// Actions the reducer does not handle must leave `state` untouched.
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        ) -> SmallVec<[Effect<Self::Action>; 4]>;
    }
}

/// Effect module - Side effect descriptions
///
/// Effects are values returned from reducers. The store executes them.
pub mod effect {
    use std::future::Future;
    use std::pin::Pin;

    /// A boxed future that may produce one action
    pub type ActionFuture<Action> = Pin<Box<dyn Future<Output = Option<Action>> + Send>>;

    /// Effect type - describes a side effect to be executed
    ///
    /// Effects are NOT executed immediately. They are descriptions of what should happen,
    /// returned from reducers and executed by the Store runtime.
    pub enum Effect<Action> {
        /// No-op effect
        None,

        /// Run effects concurrently
        Parallel(Vec<Effect<Action>>),

        /// Run effects one after another
        Sequential(Vec<Effect<Action>>),

        /// Arbitrary async computation
        ///
        /// If the future yields `Some(action)`, the action is fed back into the store.
        Future(ActionFuture<Action>),
    }

    impl<Action> std::fmt::Debug for Effect<Action>
    where
        Action: std::fmt::Debug,
    {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            match self {
                Effect::None => write!(f, "Effect::None"),
                Effect::Parallel(effects) => {
                    f.debug_tuple("Effect::Parallel").field(effects).finish()
                },
                Effect::Sequential(effects) => {
                    f.debug_tuple("Effect::Sequential").field(effects).finish()
                },
                Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
            }
        }
    }

    impl<Action> Effect<Action> {
        /// Combine effects to run in parallel
        #[must_use]
        pub const fn merge(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Parallel(effects)
        }

        /// Chain effects to run sequentially
        #[must_use]
        pub const fn chain(effects: Vec<Effect<Action>>) -> Effect<Action> {
            Effect::Sequential(effects)
        }

        /// Returns true for `Effect::None`
        #[must_use]
        pub const fn is_none(&self) -> bool {
            matches!(self, Effect::None)
        }
    }
}

pub use effect::Effect;
pub use reducer::Reducer;
