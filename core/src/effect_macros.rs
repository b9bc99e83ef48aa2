//! Declarative macros for ergonomic effect construction

/// Create an `Effect::Future` from an async block
///
/// The block must evaluate to `Option<Action>`.
///
/// # Example
///
/// ```rust,ignore
/// use todolist_core::async_effect;
///
/// let api = Arc::clone(&env.api);
/// async_effect! {
///     match api.fetch_todos().await {
///         Ok(todos) => Some(AppAction::TodosLoaded(todos)),
///         Err(error) => Some(AppAction::TodosLoadFailed(error.to_string())),
///     }
/// }
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}
