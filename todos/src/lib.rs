//! A to-do list on a reducer-driven store.
//!
//! The whole application state is one [`AppState`] tree owned by a
//! [`Store`](todolist_runtime::Store). Every change is an [`AppAction`]
//! reduced by [`AppReducer`]; the list view reads it through memoized
//! [`TodoSelectors`]. Loading and creating todos are command actions whose
//! reducer arms return effects that call the [`TodoApi`] and feed the result
//! back as a plain action.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use todolist::mocks::MockTodoApi;
//! use todolist::{AppAction, AppEnvironment, AppReducer, AppState, TodoSelectors};
//! use todolist_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = AppEnvironment::new(Arc::new(MockTodoApi::new()));
//! let store = Store::new(AppState::default(), AppReducer::new(), env);
//!
//! let mut handle = store.send(AppAction::save_new_todo("Buy milk")).await?;
//! handle.wait().await;
//!
//! let selectors = TodoSelectors::new();
//! let visible = store.state(|s| selectors.filtered_todos(s)).await;
//! println!("{} todo(s)", visible.len());
//! # Ok(())
//! # }
//! ```

pub mod actions;
pub mod client;
pub mod config;
pub mod environment;
pub mod error;
pub mod fake_api;
pub mod mocks;
pub mod reducer;
pub mod selectors;
pub mod types;

pub use actions::{AppAction, ColorChange};
pub use client::HttpTodoApi;
pub use config::Config;
pub use environment::{AppEnvironment, TodoApi};
pub use error::{ApiError, TodoError};
pub use reducer::{AppReducer, FiltersReducer, TodosReducer};
pub use selectors::TodoSelectors;
pub use types::{AppState, FilterState, LoadingStatus, StatusFilter, Todo, TodoId, TodosState};
