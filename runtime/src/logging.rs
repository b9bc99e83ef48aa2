//! Logging middleware for reducers.
//!
//! [`LoggingReducer`] wraps any reducer and emits a `debug` event for each
//! dispatched action and a `trace` event with the state after reduction.
//! It changes nothing about the reduction itself.

use todolist_core::{effect::Effect, reducer::Reducer, SmallVec};

/// A reducer wrapper that logs actions and resulting state
///
/// # Example
///
/// ```ignore
/// let reducer = LoggingReducer::new(AppReducer::new(), "app");
/// let store = Store::new(AppState::default(), reducer, environment);
/// ```
#[derive(Debug, Clone)]
pub struct LoggingReducer<R> {
    inner: R,
    label: &'static str,
}

impl<R> LoggingReducer<R> {
    /// Wrap `inner`, tagging every log line with `label`
    #[must_use]
    pub const fn new(inner: R, label: &'static str) -> Self {
        Self { inner, label }
    }

    /// The wrapped reducer
    #[must_use]
    pub const fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R> Reducer for LoggingReducer<R>
where
    R: Reducer,
    R::State: std::fmt::Debug,
    R::Action: std::fmt::Debug,
{
    type State = R::State;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        tracing::debug!(store = self.label, action = ?action, "dispatching");

        let effects = self.inner.reduce(state, action, env);

        tracing::trace!(
            store = self.label,
            state = ?state,
            effects = effects.len(),
            "next state"
        );
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use todolist_core::smallvec;

    #[derive(Debug, Clone)]
    struct Count(u32);

    #[derive(Debug, Clone)]
    struct Add(u32);

    #[derive(Clone)]
    struct AddReducer;

    impl Reducer for AddReducer {
        type State = Count;
        type Action = Add;
        type Environment = ();

        fn reduce(&self, state: &mut Count, action: Add, _env: &()) -> SmallVec<[Effect<Add>; 4]> {
            state.0 += action.0;
            smallvec![Effect::None]
        }
    }

    #[test]
    fn delegates_to_inner_reducer() {
        let reducer = LoggingReducer::new(AddReducer, "test");
        let mut state = Count(1);

        let effects = reducer.reduce(&mut state, Add(2), &());

        assert_eq!(state.0, 3);
        assert_eq!(effects.len(), 1);
    }

    #[test]
    fn logs_with_subscriber_installed() {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let reducer = LoggingReducer::new(AddReducer, "test");
            let mut state = Count(0);
            let _ = reducer.reduce(&mut state, Add(5), &());
            assert_eq!(state.0, 5);
        });
    }
}
