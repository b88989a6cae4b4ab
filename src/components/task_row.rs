//! Task Row Component
//!
//! Checkbox, title and delete button for one task. Double-click the title
//! to rename it.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::Task;
use crate::sync;

/// A single task in the list
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let id = task.id;
    let completed = task.completed;
    let title = task.title;

    let checkbox: NodeRef<html::Input> = NodeRef::new();
    let editor: NodeRef<html::Input> = NodeRef::new();
    let (editing, set_editing) = signal(false);

    let on_toggle = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            if !sync::toggle_task(&client, &store, id).await {
                // Nothing changed in the store, so nothing re-renders; undo the click
                if let Some(input) = checkbox.try_get_untracked().flatten() {
                    input.set_checked(completed);
                }
            }
        });
    };

    let on_delete = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            sync::remove_task(&client, &store, id).await;
        });
    };

    let commit = move |value: String| {
        if !editing.get_untracked() {
            return;
        }
        set_editing.set(false);
        let client = ctx.client();
        spawn_local(async move {
            sync::rename_task(&client, &store, id, &value).await;
        });
    };

    Effect::new(move |_| {
        if let Some(input) = editor.get() {
            let _ = input.focus();
        }
    });

    view! {
        <li class="task-row">
            <input
                type="checkbox"
                node_ref=checkbox
                prop:checked=completed
                on:change=on_toggle
            />
            {move || if editing.get() {
                view! {
                    <input
                        type="text"
                        class="task-title-editor"
                        node_ref=editor
                        prop:value=title.clone()
                        on:keydown=move |ev| match ev.key().as_str() {
                            "Enter" => commit(event_target_value(&ev)),
                            "Escape" => set_editing.set(false),
                            _ => {}
                        }
                        on:blur=move |ev| commit(event_target_value(&ev))
                    />
                }.into_any()
            } else {
                view! {
                    <span
                        class=if completed { "task-title completed" } else { "task-title" }
                        on:dblclick=move |_| set_editing.set(true)
                    >
                        {title.clone()}
                    </span>
                }.into_any()
            }}
            <button class="delete-btn" on:click=on_delete>"Delete"</button>
        </li>
    }
}
