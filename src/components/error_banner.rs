//! Error Banner Component
//!
//! Shows the last failed operation, with retry for list loads.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::state::{Action, TaskStateStoreFields};
use crate::store::Dispatch;
use crate::sync;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let retry = move |_| {
        let client = ctx.client();
        spawn_local(async move {
            sync::refresh(&client, &store).await;
        });
    };

    view! {
        {move || store.error().get().map(|err| {
            let retryable = err.is_retryable();
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-text">{err.to_string()}</span>
                    {retryable.then(|| view! {
                        <button class="retry-btn" on:click=retry>"Retry"</button>
                    })}
                    <button
                        class="dismiss-btn"
                        on:click=move |_| store.dispatch(Action::DismissError)
                    >
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
