//! # Todolist Testing
//!
//! Testing utilities for reducer-based stores.
//!
//! This crate provides:
//! - [`ReducerTest`]: Given-When-Then harness for reducers
//! - [`assertions`]: Effect assertions
//! - [`effects`]: Resolve effects into the actions they produce, without a store
//! - [`helpers`]: Tracing setup for tests
//!
//! ## Example
//!
//! ```ignore
//! use todolist_testing::{effects::run_effects, ReducerTest};
//!
//! #[tokio::test]
//! async fn fetch_resolves_to_loaded() {
//!     let env = AppEnvironment::new(Arc::new(MockTodoApi::with_todos(vec![])));
//!     let mut state = AppState::default();
//!
//!     let effects = AppReducer::new().reduce(&mut state, AppAction::FetchTodos, &env);
//!     let actions = run_effects(effects).await;
//!
//!     assert!(matches!(actions[..], [AppAction::TodosLoaded(_)]));
//! }
//! ```

mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Resolving effects outside a store
///
/// Reducer tests usually stop at "a Future effect was returned". These
/// helpers go one step further and run the effects, so a test can assert on
/// the actions that would be fed back.
pub mod effects {
    use futures::future::{join_all, BoxFuture, FutureExt};
    use todolist_core::effect::Effect;

    /// Run every effect and collect the produced actions
    ///
    /// Parallel children run concurrently; their actions are returned in
    /// declaration order. Sequential children run one after another.
    pub async fn run_effects<A, I>(effects: I) -> Vec<A>
    where
        A: Send + 'static,
        I: IntoIterator<Item = Effect<A>>,
    {
        let mut actions = Vec::new();
        for effect in effects {
            actions.extend(resolve(effect).await);
        }
        actions
    }

    /// Run a single effect and collect the produced actions
    pub fn resolve<A>(effect: Effect<A>) -> BoxFuture<'static, Vec<A>>
    where
        A: Send + 'static,
    {
        match effect {
            Effect::None => async { Vec::new() }.boxed(),
            Effect::Future(fut) => async move { fut.await.into_iter().collect() }.boxed(),
            Effect::Parallel(effects) => async move {
                join_all(effects.into_iter().map(resolve))
                    .await
                    .into_iter()
                    .flatten()
                    .collect()
            }
            .boxed(),
            Effect::Sequential(effects) => async move {
                let mut actions = Vec::new();
                for effect in effects {
                    actions.extend(resolve(effect).await);
                }
                actions
            }
            .boxed(),
        }
    }
}

/// Test helpers and utilities
pub mod helpers {
    use tracing_subscriber::EnvFilter;

    /// Install a test-friendly tracing subscriber
    ///
    /// Honors `RUST_LOG`, defaults to `debug`, and writes through the test
    /// harness so output is captured per test. Safe to call from every test.
    pub fn init_test_tracing() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }
}

pub use helpers::init_test_tracing;

#[cfg(test)]
mod tests {
    use super::effects::{resolve, run_effects};
    use todolist_core::effect::Effect;

    #[derive(Debug, Clone, PartialEq)]
    enum Step {
        Fetched(u32),
    }

    fn fetched(n: u32) -> Effect<Step> {
        Effect::Future(Box::pin(async move { Some(Step::Fetched(n)) }))
    }

    #[tokio::test]
    async fn none_produces_nothing() {
        assert!(resolve::<Step>(Effect::None).await.is_empty());
    }

    #[tokio::test]
    async fn future_without_action_produces_nothing() {
        let effect: Effect<Step> = Effect::Future(Box::pin(async { None }));
        assert!(resolve(effect).await.is_empty());
    }

    #[tokio::test]
    async fn nested_effects_keep_declaration_order() {
        let effects = vec![
            fetched(1),
            Effect::Parallel(vec![fetched(2), Effect::None, fetched(3)]),
            Effect::Sequential(vec![fetched(4), fetched(5)]),
        ];

        let actions = run_effects(effects).await;

        assert_eq!(
            actions,
            vec![
                Step::Fetched(1),
                Step::Fetched(2),
                Step::Fetched(3),
                Step::Fetched(4),
                Step::Fetched(5),
            ]
        );
    }

    #[test]
    fn tracing_init_is_idempotent() {
        super::init_test_tracing();
        super::init_test_tracing();
    }
}
