//! Task search.

use crate::Task;

/// Case-insensitive substring search over task text.
///
/// An empty query matches every task.
#[derive(Debug, Clone, Default)]
pub struct TextSearcher {
    query: String,
}

impl TextSearcher {
    /// Create a new searcher with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }

    /// Get the search query (lowercased).
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Returns true if the task text contains the query.
    pub fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.text.to_lowercase().contains(&self.query)
    }
}
