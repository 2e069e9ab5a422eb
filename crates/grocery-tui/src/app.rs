use crate::events::{Event, EventHandler};
use crate::form::FormState;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use grocery_core::{GroceryError, GroceryResult};
use grocery_domain::{StatusFilter, Task, TaskStore, TextSearcher, ViewQuery};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Form,
    List,
}

pub struct App {
    pub should_quit: bool,
    pub store: TaskStore,
    pub form: FormState,
    pub search: String,
    pub filter: StatusFilter,
    pub focus: Focus,
    pub selected: Option<usize>,
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            store: TaskStore::new(),
            form: FormState::new(),
            search: String::new(),
            filter: StatusFilter::All,
            focus: Focus::List,
            selected: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// The projection actually rendered: searched, grouped, filtered.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let query = ViewQuery::new(TextSearcher::new(self.search.as_str()), self.filter);
        query.project(self.store.tasks())
    }

    fn select_next(&mut self) {
        let len = self.visible_tasks().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    fn select_prev(&mut self) {
        if self.visible_tasks().is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Keep the selection inside the current projection after any change
    /// that can shrink or reorder it.
    fn clamp_selection(&mut self) {
        let len = self.visible_tasks().len();
        self.selected = match len {
            0 => None,
            _ => Some(self.selected.unwrap_or(0).min(len - 1)),
        };
    }

    /// The id of the task under the cursor, taken from the rendered list.
    /// Edits and toggles go through this id, so an active search or
    /// filter can never redirect them to a different task.
    fn selected_task_id(&self) -> Option<grocery_domain::TaskId> {
        let idx = self.selected?;
        self.visible_tasks().get(idx).map(|t| t.id)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if key.code == KeyCode::Tab {
            self.focus = match self.focus {
                Focus::Search => Focus::Form,
                Focus::Form => Focus::List,
                Focus::List => Focus::Search,
            };
            return;
        }

        match self.focus {
            Focus::Search => self.handle_search_key(key),
            Focus::Form => self.handle_form_key(key),
            Focus::List => self.handle_list_key(key),
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.search.push(c);
                self.clamp_selection();
            }
            KeyCode::Backspace => {
                self.search.pop();
                self.clamp_selection();
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.focus = Focus::List;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.form.insert_char(c),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Up => self.form.quantity_up(),
            KeyCode::Down => self.form.quantity_down(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Esc => {
                // Cancels a pending edit; the list is untouched.
                self.form.reset();
                self.focus = Focus::List;
            }
            _ => {}
        }
    }

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.quit(),
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('a') => {
                self.form.reset();
                self.focus = Focus::Form;
            }
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('s') => self.store.set_sort(self.store.sort().next()),
            KeyCode::Char('f') => {
                self.filter = self.filter.next();
                self.clamp_selection();
            }
            KeyCode::Char('D') => {
                self.store.clear();
                self.selected = None;
            }
            _ => {}
        }
    }

    /// Commit the form: append when not editing, otherwise rewrite the
    /// targeted task's text. Blank input is a no-op either way.
    fn submit_form(&mut self) {
        match self.form.editing {
            None => {
                if self.store.add(self.form.text(), self.form.quantity).is_some() {
                    self.form.reset();
                    self.clamp_selection();
                }
            }
            Some(id) => match self.store.edit(id, self.form.text()) {
                Ok(true) => {
                    self.form.reset();
                    self.focus = Focus::List;
                    self.clamp_selection();
                }
                Ok(false) => {}
                Err(GroceryError::NotFound(_)) => {
                    // The task went away under us (e.g. the list was
                    // cleared mid-edit); drop the stale edit.
                    tracing::warn!(%id, "edit target no longer exists");
                    self.form.reset();
                    self.focus = Focus::List;
                }
                Err(err) => tracing::error!(%err, "edit failed"),
            },
        }
    }

    fn begin_edit(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Some(task) = self.store.get(id) {
            self.form.load(task);
            self.focus = Focus::Form;
        }
    }

    fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Err(err) = self.store.toggle(id) {
            tracing::warn!(%err, "toggle failed");
        }
        self.clamp_selection();
    }

    pub async fn run(&mut self) -> GroceryResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new(Duration::from_millis(16));

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            if let Some(event) = events.next().await {
                match event {
                    Event::Key(key) => self.handle_key(key),
                    Event::Tick => {}
                }
            }
        }

        events.stop();
        restore_terminal(&mut terminal)?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
