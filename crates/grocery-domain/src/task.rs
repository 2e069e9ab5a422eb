use chrono::{DateTime, Utc};
use grocery_core::{GroceryError, GroceryResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type TaskId = Uuid;

/// How many of an item to buy. Valid range is 1..=20, matching the
/// quantity selector in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 20;

    pub fn new(value: u8) -> GroceryResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GroceryError::Validation(format!(
                "quantity must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Step up, saturating at the selector maximum.
    pub fn increment(self) -> Self {
        Self(self.0.min(Self::MAX - 1) + 1)
    }

    /// Step down, saturating at the selector minimum.
    pub fn decrement(self) -> Self {
        Self(self.0.max(Self::MIN + 1) - 1)
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub quantity: Quantity,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    pub fn new(text: String, quantity: Quantity) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            text,
            quantity,
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_text(&mut self, text: String) {
        self.text = text;
        self.updated_at = Utc::now();
    }

    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_range() {
        assert!(Quantity::new(0).is_err());
        assert!(Quantity::new(1).is_ok());
        assert!(Quantity::new(20).is_ok());
        assert!(Quantity::new(21).is_err());
    }

    #[test]
    fn test_quantity_saturating_steps() {
        let q = Quantity::new(20).unwrap();
        assert_eq!(q.increment().get(), 20);

        let q = Quantity::new(1).unwrap();
        assert_eq!(q.decrement().get(), 1);

        let q = Quantity::new(5).unwrap();
        assert_eq!(q.increment().get(), 6);
        assert_eq!(q.decrement().get(), 4);
    }

    #[test]
    fn test_new_task_is_incomplete() {
        let task = Task::new("Milk".to_string(), Quantity::default());
        assert!(!task.completed);
        assert_eq!(task.text, "Milk");
        assert_eq!(task.quantity.get(), 1);
        assert_eq!(task.created_at, task.updated_at);
    }

    #[test]
    fn test_fresh_ids_are_unique() {
        let a = Task::new("Milk".to_string(), Quantity::default());
        let b = Task::new("Milk".to_string(), Quantity::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_completed_flips_flag() {
        let mut task = Task::new("Eggs".to_string(), Quantity::default());
        task.toggle_completed();
        assert!(task.completed);
        task.toggle_completed();
        assert!(!task.completed);
    }
}
