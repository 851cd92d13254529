//! Session State
//!
//! `TodoList` is the in-memory collection of one session. The controller
//! reaches it through `TodoState`, so the owner (a reactive store in the UI,
//! a plain `RefCell` in tests) is injected rather than global.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::domain::{Priority, Todo, TodoId, TodoPatch};

/// Todos of the session, unique by id, newest `created_at` first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    todos: Vec<Todo>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from arbitrary records: newest first (stable), first occurrence of an id wins
    pub fn from_records(records: Vec<Todo>) -> Self {
        let mut seen = HashSet::new();
        let mut todos: Vec<Todo> = records
            .into_iter()
            .filter(|t| seen.insert(t.id.clone()))
            .collect();
        todos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { todos }
    }

    pub fn replace_all(&mut self, records: Vec<Todo>) {
        *self = Self::from_records(records);
    }

    /// Put a freshly created record at the front. Replaces any record with the same id.
    pub fn prepend(&mut self, todo: Todo) {
        self.todos.retain(|t| t.id != todo.id);
        self.todos.insert(0, todo);
    }

    /// Patch the record with `id`; false if it is not held
    pub fn apply_patch(&mut self, id: &TodoId, patch: &TodoPatch) -> bool {
        match self.todos.iter_mut().find(|t| &t.id == id) {
            Some(todo) => {
                patch.apply_to(todo);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &TodoId) -> Option<Todo> {
        let index = self.todos.iter().position(|t| &t.id == id)?;
        Some(self.todos.remove(index))
    }

    /// Remove every record whose id is in `ids`, returning how many were removed
    pub fn remove_ids(&mut self, ids: &[TodoId]) -> usize {
        let ids: HashSet<&TodoId> = ids.iter().collect();
        let before = self.todos.len();
        self.todos.retain(|t| !ids.contains(&t.id));
        before - self.todos.len()
    }

    pub fn completed_ids(&self) -> Vec<TodoId> {
        self.todos.iter().filter(|t| t.completed).map(|t| t.id.clone()).collect()
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    /// Stored priority of a todo, as last confirmed by the remote store
    pub fn priority_of(&self, id: &TodoId) -> Option<Priority> {
        self.get(id).map(|t| t.priority)
    }

    pub fn contains(&self, id: &TodoId) -> bool {
        self.get(id).is_some()
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

/// Owner of a session's `TodoList`
///
/// Closures must not call back into the controller.
pub trait TodoState {
    fn read<R>(&self, f: impl FnOnce(&TodoList) -> R) -> R;

    fn write(&self, f: impl FnOnce(&mut TodoList));
}

/// `TodoState` backed by a shared `RefCell`
#[derive(Debug, Clone, Default)]
pub struct LocalTodoState {
    list: Rc<RefCell<TodoList>>,
}

impl LocalTodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> TodoList {
        self.list.borrow().clone()
    }
}

impl TodoState for LocalTodoState {
    fn read<R>(&self, f: impl FnOnce(&TodoList) -> R) -> R {
        f(&self.list.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut TodoList)) {
        f(&mut self.list.borrow_mut())
    }
}
