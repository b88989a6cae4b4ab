//! New Task Form Component
//!
//! Text input bound to the draft title. Enter or "Add" submits.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::state::{Action, TaskStateStoreFields};
use crate::store::Dispatch;
use crate::sync;

/// Form for creating new tasks
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let create_task = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let client = ctx.client();
        spawn_local(async move {
            sync::submit_draft(&client, &store).await;
        });
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a task"
                prop:value=move || store.draft_title().get()
                on:input=move |ev| store.dispatch(Action::SetDraft(event_target_value(&ev)))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
