//! The derived view: the projection of the canonical list that actually
//! gets rendered.

use crate::{StatusFilter, Task, TaskFilter, TextSearcher};

/// Search and filter settings for one render pass.
///
/// Projection never mutates the canonical list. The `All` view always
/// groups incomplete tasks before completed ones, whatever the sort mode;
/// within each group the canonical (sorted) order is kept.
#[derive(Debug, Clone, Default)]
pub struct ViewQuery {
    pub search: TextSearcher,
    pub filter: StatusFilter,
}

impl ViewQuery {
    pub fn new(search: TextSearcher, filter: StatusFilter) -> Self {
        Self { search, filter }
    }

    /// Project the canonical list into the rendered list.
    pub fn project<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        let incomplete = tasks
            .iter()
            .filter(|t| !t.completed && self.search.matches(t));
        let completed = tasks
            .iter()
            .filter(|t| t.completed && self.search.matches(t));

        match self.filter {
            StatusFilter::All => incomplete.chain(completed).collect(),
            StatusFilter::Incomplete => incomplete.collect(),
            StatusFilter::Completed => completed.collect(),
        }
    }
}
