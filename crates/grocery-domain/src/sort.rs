//! Task sorting.
//!
//! The sort pass runs over the canonical list itself, so index-based
//! operations observe the new order.

use crate::Task;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Enum dispatch for sorting tasks by a specific field.
///
/// Both orderings are ascending. Name comparison is case-insensitive;
/// equal keys keep their relative order (slice sort is stable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortBy {
    Name,
    Quantity,
}

impl SortBy {
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::Name => a.text.to_lowercase().cmp(&b.text.to_lowercase()),
            Self::Quantity => a.quantity.cmp(&b.quantity),
        }
    }

    /// Sort a slice of tasks in place.
    pub fn apply(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }

    /// The next mode in the Sort By selector.
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Quantity,
            Self::Quantity => Self::Name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Quantity => "Quantity",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quantity;

    fn task(text: &str, quantity: u8) -> Task {
        Task::new(text.to_string(), Quantity::new(quantity).unwrap())
    }

    #[test]
    fn test_sort_by_quantity_ascending() {
        let mut tasks = vec![task("a", 3), task("b", 1), task("c", 2)];
        SortBy::Quantity.apply(&mut tasks);

        let quantities: Vec<u8> = tasks.iter().map(|t| t.quantity.get()).collect();
        assert_eq!(quantities, vec![1, 2, 3]);
    }

    #[test]
    fn test_sort_by_name_case_insensitive() {
        let mut tasks = vec![task("Banana", 1), task("apple", 1)];
        SortBy::Name.apply(&mut tasks);

        assert_eq!(tasks[0].text, "apple");
        assert_eq!(tasks[1].text, "Banana");
    }

    #[test]
    fn test_name_compare_equal_keys() {
        let a = task("Milk", 1);
        let b = task("milk", 2);
        assert_eq!(SortBy::Name.compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_next_cycles_both_modes() {
        assert_eq!(SortBy::Name.next(), SortBy::Quantity);
        assert_eq!(SortBy::Quantity.next(), SortBy::Name);
    }
}
