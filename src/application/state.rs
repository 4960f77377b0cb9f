//! Application state management for the terminal todo list.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface, and bridges domain transitions to the
//! persistence store: every committed mutation rewrites the stored document.

use crate::domain::{Todo, TodoList};
use crate::infrastructure::{InMemoryStore, TodoStore};
use log::{info, warn};

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug)]
pub enum AppMode {
    /// Normal navigation mode - movement keys change selection, shortcuts available
    Normal,
    /// A new todo is being typed into the input line
    Adding,
    /// The selected todo's text is being edited
    Editing,
    /// Help screen is displayed
    Help,
}

/// Main application state containing the todo list and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and manage user interactions with the todo collection.
///
/// # Examples
///
/// ```
/// use tudu::application::App;
///
/// let app = App::default();
/// assert!(app.todos.is_empty());
/// assert_eq!(app.selected, 0);
/// ```
pub struct App {
    /// The ordered todo collection
    pub todos: TodoList,
    /// Currently selected row (zero-based)
    pub selected: usize,
    /// Current application mode
    pub mode: AppMode,
    /// Current input buffer (for adding/editing modes)
    pub input: String,
    /// Cursor position within the input buffer
    pub cursor_position: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Storage collaborator written after every committed mutation
    store: Box<dyn TodoStore>,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Box::new(InMemoryStore::new()))
    }
}

impl App {
    /// Creates the application state, hydrating the todo list from the store.
    ///
    /// A store that fails to load (unreadable or malformed data) must not
    /// halt startup: the list starts empty and the failure is reported in
    /// the status bar.
    pub fn new(store: Box<dyn TodoStore>) -> Self {
        let (todos, status_message) = match store.load() {
            Ok(todos) => {
                info!("loaded {} todos", todos.len());
                (TodoList::from_todos(todos), None)
            }
            Err(err) => {
                warn!("failed to load saved todos: {}", err);
                (
                    TodoList::new(),
                    Some(format!("Load failed, starting empty: {}", err)),
                )
            }
        };

        Self {
            todos,
            selected: 0,
            mode: AppMode::Normal,
            input: String::new(),
            cursor_position: 0,
            status_message,
            help_scroll: 0,
            store,
        }
    }

    /// Returns the todo under the selection cursor, if the list is non-empty.
    pub fn selected_todo(&self) -> Option<&Todo> {
        self.todos.get(self.selected)
    }

    /// Moves the selection up one row.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Moves the selection down one row.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.todos.len() {
            self.selected += 1;
        }
    }

    /// Switches to adding mode with an empty input line.
    pub fn start_adding(&mut self) {
        self.mode = AppMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
        self.status_message = None;
    }

    /// Commits the input line as a new todo and returns to normal mode.
    ///
    /// Whitespace-only input is silently discarded; nothing is persisted
    /// in that case. On success the selection moves to the new todo.
    pub fn finish_adding(&mut self) {
        if self.todos.add(&self.input) {
            self.selected = self.todos.len() - 1;
            self.persist();
        }
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Switches to editing mode for the currently selected todo.
    ///
    /// Loads the todo's text into the input buffer and positions the cursor
    /// at the end. No-op when the list is empty.
    pub fn start_editing(&mut self) {
        let Some(todo) = self.todos.get(self.selected) else {
            return;
        };
        self.mode = AppMode::Editing;
        self.input = todo.text.clone();
        self.cursor_position = self.input.len();
        self.status_message = None;
    }

    /// Commits the input line as the selected todo's new text.
    ///
    /// Empty text is accepted. Returns to normal mode after completion.
    pub fn finish_editing(&mut self) {
        if let Some(id) = self.selected_todo().map(|todo| todo.id) {
            if self.todos.edit(id, &self.input) {
                self.persist();
            }
        }
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Cancels adding/editing and returns to normal mode without saving.
    pub fn cancel_input(&mut self) {
        self.mode = AppMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Flips the completion flag on the selected todo.
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_todo().map(|todo| todo.id) {
            if self.todos.toggle(id) {
                self.persist();
            }
        }
    }

    /// Deletes the selected todo and clamps the selection to the list end.
    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_todo().map(|todo| todo.id) {
            if self.todos.delete(id) {
                if self.selected >= self.todos.len() && self.selected > 0 {
                    self.selected -= 1;
                }
                self.persist();
            }
        }
    }

    /// Writes the full current collection through the store.
    ///
    /// A failed write is reported in the status bar; the in-memory state
    /// stays authoritative for the rest of the session.
    fn persist(&mut self) {
        if let Err(err) = self.store.save(self.todos.todos()) {
            warn!("failed to save todos: {}", err);
            self.status_message = Some(format!("Save failed: {}", err));
        }
    }
}
