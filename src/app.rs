//! Task Manager App
//!
//! Root component: provides the store and loads tasks on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ErrorBanner, FilterBar, NewTaskForm, TaskList};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::{new_app_store, task_counts};
use crate::sync;

#[component]
pub fn App() -> impl IntoView {
    let store = new_app_store();
    let config = ApiConfig::from_build_env();
    tracing::info!(target: "app", base_url = config.base_url(), "task service configured");

    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    // Load tasks on mount
    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            sync::refresh(&client, &store).await;
        });
    });

    let counts = move || {
        let (total, done) = task_counts(&store);
        format!("{} tasks, {} done", total, done)
    };

    view! {
        <main class="task-app">
            <h2>"Task Manager"</h2>
            <NewTaskForm />
            <FilterBar />
            <ErrorBanner />
            <TaskList />
            <p class="task-count">{counts}</p>
        </main>
    }
}
