//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The todo list
//! field doubles as the controller's session state.

use leptos::prelude::*;
use reactive_stores::Store;
use taskflow_core::{StatusFilter, TodoList, TodoState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todos of this session, newest first
    pub todos: TodoList,
    /// Text typed into the search box
    pub search_term: String,
    /// All / active / completed
    pub status_filter: StatusFilter,
    /// True until the initial load settles
    pub loading: bool,
    /// Running on the in-memory gateway (no remote store configured)
    pub demo_mode: bool,
}

impl AppState {
    pub fn new(demo_mode: bool) -> Self {
        Self {
            loading: true,
            demo_mode,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Controller state backed by the store's `todos` field.
///
/// Writes notify every view reading `todos`.
#[derive(Clone, Copy)]
pub struct StoreTodoState(pub AppStore);

impl TodoState for StoreTodoState {
    fn read<R>(&self, f: impl FnOnce(&TodoList) -> R) -> R {
        f(&self.0.todos().read_untracked())
    }

    fn write(&self, f: impl FnOnce(&mut TodoList)) {
        f(&mut self.0.todos().write())
    }
}
