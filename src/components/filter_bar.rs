//! Filter Bar Component
//!
//! All / Active / Completed selector buttons.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::FilterMode;
use crate::state::TaskStateStoreFields;
use crate::sync;

/// Filter buttons; picking one refetches the list
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="filters">
            {FilterMode::ALL.into_iter().map(|mode| {
                let is_selected = move || store.filter().get() == mode;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| {
                            let client = ctx.client();
                            spawn_local(async move {
                                sync::change_filter(&client, &store, mode).await;
                            });
                        }
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
