//! Task State and Reducer
//!
//! Every change to the UI state goes through `reduce`, a pure function from
//! the current state and an `Action` to the next state.

use reactive_stores::Store;

use crate::error::{ApiError, Operation, SyncError};
use crate::models::{FilterMode, Task, TaskId};

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TaskState {
    /// Local mirror of the server's tasks, newest creations first
    pub tasks: Vec<Task>,
    pub filter: FilterMode,
    /// Text of the new-task input
    pub draft_title: String,
    /// Bumped on every list fetch; older completions are dropped
    pub fetch_generation: u64,
    pub loading: bool,
    pub error: Option<SyncError>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetDraft(String),
    SetFilter(FilterMode),
    FetchStarted,
    FetchCompleted {
        generation: u64,
        outcome: Result<Vec<Task>, ApiError>,
    },
    TaskCreated(Task),
    TaskUpdated(Task),
    TaskRemoved(TaskId),
    OperationFailed(SyncError),
    DismissError,
}

impl TaskState {
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}

/// Tasks matching the filter, in list order
pub fn visible_tasks(tasks: &[Task], filter: FilterMode) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}

pub fn reduce(mut state: TaskState, action: Action) -> TaskState {
    match action {
        Action::SetDraft(text) => state.draft_title = text,
        Action::SetFilter(filter) => state.filter = filter,
        Action::FetchStarted => {
            state.fetch_generation += 1;
            state.loading = true;
        }
        Action::FetchCompleted { generation, outcome } => {
            if generation != state.fetch_generation {
                tracing::debug!(
                    target: "state",
                    generation,
                    latest = state.fetch_generation,
                    "dropping stale fetch"
                );
                return state;
            }
            state.loading = false;
            match outcome {
                Ok(tasks) => {
                    state.tasks = tasks;
                    if matches!(&state.error, Some(err) if err.operation == Operation::Load) {
                        state.error = None;
                    }
                }
                Err(error) => state.error = Some(SyncError::new(Operation::Load, error)),
            }
        }
        Action::TaskCreated(task) => {
            state.tasks.insert(0, task);
            state.draft_title.clear();
            state.error = None;
        }
        Action::TaskUpdated(updated) => {
            if let Some(task) = state.tasks.iter_mut().find(|task| task.id == updated.id) {
                *task = updated;
            }
            state.error = None;
        }
        Action::TaskRemoved(id) => state.tasks.retain(|task| task.id != id),
        Action::OperationFailed(error) => state.error = Some(error),
        Action::DismissError => state.error = None,
    }
    state
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Shared buffer the fmt subscriber writes into
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    fn task(id: TaskId, title: &str, completed: bool) -> Task {
        Task { id, title: title.to_string(), completed }
    }

    fn sample_state() -> TaskState {
        TaskState {
            tasks: vec![task(1, "A", false), task(2, "B", true)],
            ..Default::default()
        }
    }

    fn ids(tasks: &[Task]) -> Vec<TaskId> {
        tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_visible_tasks_by_filter() {
        let mut state = sample_state();
        assert_eq!(ids(&visible_tasks(&state.tasks, state.filter)), vec![1, 2]);

        state = reduce(state, Action::SetFilter(FilterMode::Active));
        assert_eq!(visible_tasks(&state.tasks, state.filter), vec![task(1, "A", false)]);

        state = reduce(state, Action::SetFilter(FilterMode::Completed));
        assert_eq!(visible_tasks(&state.tasks, state.filter), vec![task(2, "B", true)]);
    }

    #[test]
    fn test_task_created_prepends_and_clears_draft() {
        let state = reduce(sample_state(), Action::SetDraft("C".to_string()));
        let state = reduce(state, Action::TaskCreated(task(3, "C", false)));

        assert_eq!(ids(&state.tasks), vec![3, 1, 2]);
        assert!(state.draft_title.is_empty());
    }

    #[test]
    fn test_operation_failed_keeps_draft_and_list() {
        let state = reduce(sample_state(), Action::SetDraft("C".to_string()));
        let error = SyncError::new(Operation::Create, ApiError::Status(500));
        let state = reduce(state, Action::OperationFailed(error.clone()));

        assert_eq!(state.draft_title, "C");
        assert_eq!(ids(&state.tasks), vec![1, 2]);
        assert_eq!(state.error, Some(error));
    }

    #[test]
    fn test_task_updated_replaces_only_matching_entry() {
        let state = reduce(sample_state(), Action::TaskUpdated(task(1, "A", true)));
        assert_eq!(state.tasks, vec![task(1, "A", true), task(2, "B", true)]);

        // Unknown ids leave the list alone
        let state = reduce(state, Action::TaskUpdated(task(9, "Z", false)));
        assert_eq!(ids(&state.tasks), vec![1, 2]);
    }

    #[test]
    fn test_task_removed() {
        let state = reduce(sample_state(), Action::TaskRemoved(2));
        assert_eq!(state.tasks, vec![task(1, "A", false)]);
    }

    #[test]
    fn test_stale_fetch_is_dropped() {
        let state = reduce(sample_state(), Action::FetchStarted);
        let first = state.fetch_generation;
        let state = reduce(state, Action::FetchStarted);
        let second = state.fetch_generation;
        assert!(second > first);

        let state = reduce(state, Action::FetchCompleted {
            generation: second,
            outcome: Ok(vec![task(5, "New", false)]),
        });
        assert!(!state.loading);

        let state = reduce(state, Action::FetchCompleted {
            generation: first,
            outcome: Ok(vec![task(4, "Old", false)]),
        });
        assert_eq!(ids(&state.tasks), vec![5]);
    }

    #[test]
    fn test_failed_fetch_records_error_and_keeps_list() {
        let state = reduce(sample_state(), Action::FetchStarted);
        let generation = state.fetch_generation;
        let state = reduce(state, Action::FetchCompleted {
            generation,
            outcome: Err(ApiError::Transport("connection refused".to_string())),
        });

        assert_eq!(ids(&state.tasks), vec![1, 2]);
        assert!(!state.loading);
        assert_eq!(state.error.as_ref().map(|e| e.operation), Some(Operation::Load));

        // A later successful load clears it
        let state = reduce(state, Action::FetchStarted);
        let generation = state.fetch_generation;
        let state = reduce(state, Action::FetchCompleted { generation, outcome: Ok(vec![]) });
        assert_eq!(state.error, None);
        assert!(state.tasks.is_empty());
    }

    #[test]
    fn test_dismiss_error() {
        let error = SyncError::new(Operation::Delete, ApiError::Status(503));
        let state = reduce(sample_state(), Action::OperationFailed(error));
        let state = reduce(state, Action::DismissError);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_stale_fetch_is_traced_under_state_target() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let state = reduce(sample_state(), Action::FetchStarted);
            let state = reduce(state, Action::FetchStarted);
            reduce(state, Action::FetchCompleted { generation: 1, outcome: Ok(vec![]) });
        });

        let output = captured.text();
        assert!(output.contains("DEBUG state: dropping stale fetch"), "got {output:?}");
        assert!(output.contains("generation=1"), "got {output:?}");
        assert!(output.contains("latest=2"), "got {output:?}");
    }
}
