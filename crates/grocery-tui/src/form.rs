//! The add/edit form: text buffer, quantity selector, and edit cursor.

use grocery_domain::{Quantity, Task, TaskId};

/// Which task the form is editing, if any. `None` means submit appends
/// a new task.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    text: String,
    cursor: usize,
    pub quantity: Quantity,
    pub editing: Option<TaskId>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            if let Some(prev) = self.text[..self.cursor].chars().next_back() {
                self.cursor -= prev.len_utf8();
                self.text.remove(self.cursor);
            }
        }
    }

    pub fn quantity_up(&mut self) {
        self.quantity = self.quantity.increment();
    }

    pub fn quantity_down(&mut self) {
        self.quantity = self.quantity.decrement();
    }

    /// Enter edit mode, pre-loading text and quantity from the task.
    pub fn load(&mut self, task: &Task) {
        self.text = task.text.clone();
        self.cursor = self.text.len();
        self.quantity = task.quantity;
        self.editing = Some(task.id);
    }

    /// Back to defaults: empty text, quantity 1, not editing.
    pub fn reset(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.quantity = Quantity::default();
        self.editing = None;
    }
}
