//! The canonical task list and its command handlers.

use crate::{Quantity, SortBy, Task, TaskId};
use grocery_core::{GroceryError, GroceryResult};

/// Single source of truth for the list. Every mutating command ends with
/// an explicit sort pass over the canonical list, so the stored order
/// always reflects the active sort mode.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    sort: SortBy,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            sort: SortBy::Quantity,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn sort(&self) -> SortBy {
        self.sort
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task. Whitespace-only text is a no-op and returns
    /// `None`; otherwise returns the id of the new task.
    pub fn add(&mut self, text: &str, quantity: Quantity) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let task = Task::new(text.to_string(), quantity);
        let id = task.id;
        tracing::debug!(%id, text, quantity = quantity.get(), "adding task");
        self.tasks.push(task);
        self.resort();
        Some(id)
    }

    /// Rewrite the text of an existing task. Id, quantity, and completion
    /// are preserved. Whitespace-only text is a no-op and returns
    /// `Ok(false)`; a missing id is an error.
    pub fn edit(&mut self, id: TaskId, text: &str) -> GroceryResult<bool> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(false);
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| GroceryError::NotFound(format!("task {id}")))?;
        tracing::debug!(%id, text, "editing task");
        task.update_text(text.to_string());
        self.resort();
        Ok(true)
    }

    /// Flip the completion flag of the task with the given id. All other
    /// tasks and the list length are unchanged.
    pub fn toggle(&mut self, id: TaskId) -> GroceryResult<()> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| GroceryError::NotFound(format!("task {id}")))?;
        task.toggle_completed();
        tracing::debug!(%id, completed = task.completed, "toggled task");
        self.resort();
        Ok(())
    }

    /// Drop every task, unconditionally.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.tasks.len(), "clearing list");
        self.tasks.clear();
    }

    /// Change the sort mode and re-sort the canonical list.
    pub fn set_sort(&mut self, sort: SortBy) {
        self.sort = sort;
        self.resort();
    }

    fn resort(&mut self) {
        self.sort.apply(&mut self.tasks);
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    fn qty(n: u8) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_add_appends_incomplete_task() {
        let mut store = TaskStore::new();
        let id = store.add("Milk", qty(2)).unwrap();

        assert_eq!(store.len(), 1);
        let task = store.get(id).unwrap();
        assert_eq!(task.text, "Milk");
        assert_eq!(task.quantity.get(), 2);
        assert!(!task.completed);
    }

    #[test]
    fn test_add_trims_text() {
        let mut store = TaskStore::new();
        let id = store.add("  Milk  ", qty(1)).unwrap();
        assert_eq!(store.get(id).unwrap().text, "Milk");
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut store = TaskStore::new();
        assert!(store.add("", qty(1)).is_none());
        assert!(store.add("   ", qty(1)).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_edit_preserves_id_quantity_and_completion() {
        let mut store = TaskStore::new();
        let id = store.add("Milk", qty(3)).unwrap();
        store.toggle(id).unwrap();

        assert!(store.edit(id, "Oat milk").unwrap());

        let task = store.get(id).unwrap();
        assert_eq!(task.id, id);
        assert_eq!(task.text, "Oat milk");
        assert_eq!(task.quantity.get(), 3);
        assert!(task.completed);
    }

    #[test]
    fn test_edit_blank_is_noop() {
        let mut store = TaskStore::new();
        let id = store.add("Milk", qty(1)).unwrap();
        assert!(!store.edit(id, "  ").unwrap());
        assert_eq!(store.get(id).unwrap().text, "Milk");
    }

    #[test]
    fn test_edit_missing_id_is_not_found() {
        let mut store = TaskStore::new();
        assert!(store.edit(uuid::Uuid::new_v4(), "Milk").is_err());
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut store = TaskStore::new();
        let a = store.add("Milk", qty(1)).unwrap();
        let b = store.add("Eggs", qty(2)).unwrap();

        store.toggle(a).unwrap();

        assert!(store.get(a).unwrap().completed);
        assert!(!store.get(b).unwrap().completed);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_toggle_missing_id_is_not_found() {
        let mut store = TaskStore::new();
        store.add("Milk", qty(1));
        let err = store.toggle(uuid::Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, GroceryError::NotFound(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_empties_list() {
        let mut store = TaskStore::new();
        store.add("Milk", qty(1));
        store.add("Eggs", qty(2));
        store.clear();
        assert!(store.is_empty());

        // Clearing an empty list is fine too.
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_canonical_list_stays_sorted() {
        let mut store = TaskStore::new();
        store.set_sort(SortBy::Quantity);
        store.add("c", qty(3));
        store.add("a", qty(1));
        store.add("b", qty(2));

        let quantities: Vec<u8> = store.tasks().iter().map(|t| t.quantity.get()).collect();
        assert_eq!(quantities, vec![1, 2, 3]);

        store.set_sort(SortBy::Name);
        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_edit_resorts_by_name() {
        let mut store = TaskStore::new();
        store.set_sort(SortBy::Name);
        let id = store.add("Apple", qty(1)).unwrap();
        store.add("Banana", qty(1));

        store.edit(id, "Zucchini").unwrap();

        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["Banana", "Zucchini"]);
    }
}
