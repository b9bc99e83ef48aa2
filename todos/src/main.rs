//! Command-line demo of the to-do list store.
//!
//! Starts the in-process fake API (unless `TODO_API_URL` points elsewhere),
//! then walks through loading, adding, editing and filtering todos, printing
//! the visible list through the selectors after each step.

use std::sync::Arc;
use todolist::{
    fake_api, AppAction, AppEnvironment, AppReducer, AppState, ColorChange, Config, HttpTodoApi,
    StatusFilter, TodoId, TodoSelectors,
};
use todolist_runtime::{LoggingReducer, Store};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type AppStore = Store<AppState, AppAction, AppEnvironment, LoggingReducer<AppReducer>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = match &config.api_url {
        Some(url) => url.clone(),
        None => {
            let (addr, _server) = fake_api::spawn(config.fake_api_addr, fake_api::FakeDb::seeded()).await?;
            format!("http://{addr}")
        },
    };
    info!(%base_url, "Using todo API");

    let env = AppEnvironment::new(Arc::new(HttpTodoApi::new(base_url)));
    let store: AppStore = Store::with_config(
        AppState::default(),
        LoggingReducer::new(AppReducer::new(), "todolist"),
        env,
        config.store_config(),
    );

    let selectors = TodoSelectors::new();
    let mut revisions = store.subscribe_state();
    let renderer = tokio::spawn(async move {
        while revisions.changed().await.is_ok() {
            let revision = *revisions.borrow_and_update();
            tracing::trace!(revision, "State changed");
        }
    });

    println!("=== Todo List ===");

    store.send(AppAction::FetchTodos).await?.wait().await;
    render(&store, &selectors, "Loaded").await;

    store
        .send(AppAction::save_new_todo("Try the CLI demo"))
        .await?
        .wait()
        .await;
    render(&store, &selectors, "Added a todo").await;

    let first = store.state(|s| s.todos.entities.keys().next().copied()).await;
    if let Some(id) = first {
        store.send(AppAction::TodoToggled(id)).await?;
        store.send(AppAction::color_selected(id, "green")).await?;
        render(&store, &selectors, &format!("Toggled and tagged #{id}")).await;
    }

    store
        .send(AppAction::StatusFilterChanged(StatusFilter::Active))
        .await?;
    render(&store, &selectors, "Showing active").await;

    store
        .send(AppAction::color_filter_changed("blue", ColorChange::Added))
        .await?;
    render(&store, &selectors, "Showing active + blue").await;

    store
        .send(AppAction::StatusFilterChanged(StatusFilter::All))
        .await?;
    store
        .send(AppAction::color_filter_changed("blue", ColorChange::Removed))
        .await?;
    store.send(AppAction::TodoToggled(TodoId::new(u64::MAX))).await?;
    if let Some(error) = store.state(|s| s.todos.last_error.clone()).await {
        println!("\n(expected) {error}");
    }

    store.send(AppAction::AllTodosCompleted).await?;
    render(&store, &selectors, "Completed everything").await;

    store.send(AppAction::CompletedTodosCleared).await?;
    render(&store, &selectors, "Cleared completed").await;

    store.shutdown(config.shutdown_timeout()).await?;
    renderer.abort();
    info!("Done");
    Ok(())
}

async fn render(store: &AppStore, selectors: &TodoSelectors, title: &str) {
    let (visible, remaining, filters) = store
        .state(|s| {
            (
                selectors.filtered_todos(s),
                selectors.remaining_count(s),
                s.filters.clone(),
            )
        })
        .await;

    let colors: Vec<&str> = filters.colors.iter().map(String::as_str).collect();
    println!(
        "\n{title} [status: {}, colors: {}]",
        filters.status,
        if colors.is_empty() { "any".to_string() } else { colors.join(", ") }
    );
    for todo in &*visible {
        let mark = if todo.completed { "x" } else { " " };
        let color = if todo.color.is_empty() { String::new() } else { format!(" ({})", todo.color) };
        println!("  [{mark}] #{} {}{color}", todo.id, todo.text);
    }
    println!("  {remaining} item(s) left");
}
