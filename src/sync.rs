//! Sync Flows
//!
//! Sequences of service calls and dispatched actions behind each user
//! interaction. Delete is applied locally before the server answers; create
//! and update wait for the server's copy.

use crate::api::TaskClient;
use crate::error::{Operation, SyncError};
use crate::models::{FilterMode, Task, TaskId};
use crate::state::Action;
use crate::store::Dispatch;

/// Reload the list for the current filter. Only the latest fetch may land.
pub async fn refresh(client: &TaskClient, state: &impl Dispatch) {
    let filter = state.with_state(|s| s.filter);
    state.dispatch(Action::FetchStarted);
    let generation = state.with_state(|s| s.fetch_generation);

    let outcome = client.list_tasks(filter).await;
    match &outcome {
        Ok(tasks) => {
            tracing::info!(target: "sync", count = tasks.len(), %filter, generation, "loaded tasks")
        }
        Err(e) => tracing::warn!(target: "sync", error = %e, "loading tasks failed"),
    }
    state.dispatch(Action::FetchCompleted { generation, outcome });
}

pub async fn change_filter(client: &TaskClient, state: &impl Dispatch, filter: FilterMode) {
    state.dispatch(Action::SetFilter(filter));
    refresh(client, state).await;
}

/// Create a task from the draft. Blank drafts never reach the server.
pub async fn submit_draft(client: &TaskClient, state: &impl Dispatch) {
    let title = state.with_state(|s| s.draft_title.clone());
    if title.trim().is_empty() {
        return;
    }

    match client.create_task(&title).await {
        Ok(task) => {
            tracing::info!(target: "sync", id = task.id, "created task");
            state.dispatch(Action::TaskCreated(task));
        }
        Err(e) => {
            tracing::warn!(target: "sync", error = %e, "creating task failed");
            state.dispatch(Action::OperationFailed(SyncError::new(Operation::Create, e)));
        }
    }
}

/// Remove locally, then tell the server. The task stays gone either way.
pub async fn remove_task(client: &TaskClient, state: &impl Dispatch, id: TaskId) {
    state.dispatch(Action::TaskRemoved(id));
    if let Err(e) = client.delete_task(id).await {
        tracing::warn!(target: "sync", id, error = %e, "deleting task failed");
        state.dispatch(Action::OperationFailed(SyncError::new(Operation::Delete, e)));
    }
}

/// Flip `completed`. Returns whether the server accepted the change.
pub async fn toggle_task(client: &TaskClient, state: &impl Dispatch, id: TaskId) -> bool {
    let Some(patched) = state.with_state(|s| s.find(id).map(|task| task.toggled())) else {
        return false;
    };
    push_update(client, state, patched).await
}

/// Change a task's title. Blank or unchanged titles are ignored.
pub async fn rename_task(
    client: &TaskClient,
    state: &impl Dispatch,
    id: TaskId,
    title: &str,
) -> bool {
    let title = title.trim();
    if title.is_empty() {
        return false;
    }
    let Some(patched) = state.with_state(|s| {
        s.find(id)
            .filter(|task| task.title != title)
            .map(|task| task.retitled(title))
    }) else {
        return false;
    };
    push_update(client, state, patched).await
}

async fn push_update(client: &TaskClient, state: &impl Dispatch, patched: Task) -> bool {
    let id = patched.id;
    match client.update_task(&patched).await {
        Ok(task) => {
            tracing::info!(target: "sync", id, "updated task");
            state.dispatch(Action::TaskUpdated(task));
            true
        }
        Err(e) => {
            tracing::warn!(target: "sync", id, error = %e, "updating task failed");
            state.dispatch(Action::OperationFailed(SyncError::new(Operation::Update, e)));
            false
        }
    }
}
