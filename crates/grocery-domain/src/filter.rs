//! Task filtering by completion status.

use crate::Task;
use serde::{Deserialize, Serialize};

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// The Filter By selector: all tasks, completed only, or incomplete only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusFilter {
    All,
    Completed,
    Incomplete,
}

impl StatusFilter {
    /// The next mode in the Filter By selector.
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Completed,
            Self::Completed => Self::Incomplete,
            Self::Incomplete => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Incomplete => "Incomplete",
        }
    }
}

impl Default for StatusFilter {
    fn default() -> Self {
        Self::All
    }
}

impl TaskFilter for StatusFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Completed => task.completed,
            Self::Incomplete => !task.completed,
        }
    }
}
