//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Writes only
//! happen through `Dispatch`, which runs the reducer.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::state::{self, reduce, Action, TaskState, TaskStateStoreFields};

/// Type alias for the store
pub type AppStore = Store<TaskState>;

/// Anything that can hold task state and apply actions to it
pub trait Dispatch {
    fn dispatch(&self, action: Action);

    /// Read the current state without subscribing to it
    fn with_state<R>(&self, f: impl FnOnce(&TaskState) -> R) -> R;
}

impl Dispatch for AppStore {
    fn dispatch(&self, action: Action) {
        self.update(|state| *state = reduce(std::mem::take(state), action));
    }

    fn with_state<R>(&self, f: impl FnOnce(&TaskState) -> R) -> R {
        self.with_untracked(|state| f(state))
    }
}

pub fn new_app_store() -> AppStore {
    Store::new(TaskState::default())
}

// ========================
// Reactive Readers
// ========================

/// Tasks passing the current filter; tracks `tasks` and `filter`
pub fn visible_tasks(store: &AppStore) -> Vec<Task> {
    let filter = store.filter().get();
    store.tasks().with(|tasks| state::visible_tasks(tasks, filter))
}

/// (total, completed) over the locally held list
pub fn task_counts(store: &AppStore) -> (usize, usize) {
    store.tasks().with(|tasks| {
        let done = tasks.iter().filter(|task| task.completed).count();
        (tasks.len(), done)
    })
}

#[cfg(test)]
mod tests {
    use leptos::prelude::{Memo, Owner};

    use super::*;
    use crate::error::{ApiError, Operation, SyncError};
    use crate::models::FilterMode;

    fn task(id: i64, title: &str, completed: bool) -> Task {
        Task { id, title: title.to_string(), completed }
    }

    #[test]
    fn test_dispatch_updates_reactive_readers() {
        let owner = Owner::new();
        owner.set();

        let store = new_app_store();
        let visible = Memo::new(move |_| visible_tasks(&store));
        let counts = Memo::new(move |_| task_counts(&store));
        let draft = Memo::new(move |_| store.draft_title().get());
        assert!(visible.get().is_empty());
        assert_eq!(counts.get(), (0, 0));

        store.dispatch(Action::FetchStarted);
        let generation = store.with_state(|s| s.fetch_generation);
        store.dispatch(Action::FetchCompleted {
            generation,
            outcome: Ok(vec![task(1, "A", false), task(2, "B", true)]),
        });
        assert_eq!(visible.get().len(), 2);
        assert_eq!(counts.get(), (2, 1));

        store.dispatch(Action::SetFilter(FilterMode::Active));
        assert_eq!(visible.get(), vec![task(1, "A", false)]);
        // Filtering narrows the view, not the counts
        assert_eq!(counts.get(), (2, 1));

        store.dispatch(Action::SetDraft("C".to_string()));
        assert_eq!(draft.get(), "C");

        store.dispatch(Action::TaskRemoved(1));
        assert!(visible.get().is_empty());
        assert_eq!(counts.get(), (1, 1));

        let error = SyncError::new(Operation::Delete, ApiError::Status(500));
        store.dispatch(Action::OperationFailed(error.clone()));
        assert_eq!(store.with_state(|s| s.error.clone()), Some(error));
    }
}
