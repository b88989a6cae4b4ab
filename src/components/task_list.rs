//! Task List Component
//!
//! Visible tasks in list order, one `TaskRow` each.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::use_app_context;
use crate::state::TaskStateStoreFields;
use crate::store::visible_tasks;

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let tasks = move || visible_tasks(&store);
    let is_empty = move || tasks().is_empty() && !store.loading().get();

    view! {
        <Show when=move || store.loading().get()>
            <p class="loading">"Loading…"</p>
        </Show>
        <ul class="task-list">
            <For
                each=tasks
                // Key on every field the row renders so server updates rebuild it
                key=|task| (task.id, task.completed, task.title.clone())
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
        <Show when=is_empty>
            <p class="empty">"Nothing to show"</p>
        </Show>
    }
}
