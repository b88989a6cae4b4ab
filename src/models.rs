//! Frontend Models
//!
//! Data structures matching the task service entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned task identifier
pub type TaskId = i64;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
}

impl Task {
    /// Copy of this task with the completion flag flipped
    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }

    /// Copy of this task with a new title
    pub fn retitled(&self, title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..self.clone()
        }
    }
}

/// POST body for a task the server has not seen yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub completed: bool,
}

impl<'a> NewTask<'a> {
    pub fn new(title: &'a str) -> Self {
        Self { title, completed: false }
    }
}

/// Three-way view selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    /// Value of the `completed` query parameter, if any
    pub fn completed_param(self) -> Option<bool> {
        match self {
            FilterMode::All => None,
            FilterMode::Active => Some(false),
            FilterMode::Completed => Some(true),
        }
    }

    pub fn matches(self, task: &Task) -> bool {
        match self.completed_param() {
            None => true,
            Some(completed) => task.completed == completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
