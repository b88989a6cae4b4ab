//! UI Components
//!
//! Leptos components for the task manager view.

mod new_task_form;
mod filter_bar;
mod error_banner;
mod task_list;
mod task_row;

pub use new_task_form::NewTaskForm;
pub use filter_bar::FilterBar;
pub use error_banner::ErrorBanner;
pub use task_list::TaskList;
pub use task_row::TaskRow;
