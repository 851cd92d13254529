//! List Controller
//!
//! Every mutation is confirmed by the gateway before the local list changes.
//! On failure the list is left exactly as it was and the error is returned
//! after a diagnostic is logged.

use log::{debug, error, info};

use crate::domain::{ControllerError, NewTodo, Priority, Todo, TodoId, TodoPatch, WriteAction};
use crate::gateway::Gateway;
use crate::state::TodoState;

pub type ControllerResult<T> = Result<T, ControllerError>;

#[derive(Debug, Clone)]
pub struct ListController<G, S> {
    gateway: G,
    state: S,
}

impl<G: Gateway, S: TodoState> ListController<G, S> {
    pub fn new(gateway: G, state: S) -> Self {
        Self { gateway, state }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Replace the local list with the remote one. Returns the number of records loaded.
    pub async fn load(&self) -> ControllerResult<usize> {
        let records = self.gateway.select_all_newest_first().await.map_err(|e| {
            error!("Error fetching todos: {}", e);
            ControllerError::read(e)
        })?;
        let count = records.len();
        self.state.write(|list| list.replace_all(records));
        info!("Loaded {} todos", count);
        Ok(count)
    }

    /// Create a todo. `Ok(None)` means the title was blank and nothing was sent.
    pub async fn add(&self, title: &str, priority: Priority, category: &str) -> ControllerResult<Option<Todo>> {
        let Some(draft) = NewTodo::new(title, priority, category) else {
            debug!("Ignoring blank todo title");
            return Ok(None);
        };
        let stored = self
            .gateway
            .insert(&draft)
            .await
            .map_err(|e| self.write_failed(WriteAction::Add, e))?;
        self.state.write(|list| list.prepend(stored.clone()));
        debug!("Added todo {}", stored.id);
        Ok(Some(stored))
    }

    /// Flip `completed`. `Ok(None)` if the id is not held locally (nothing sent),
    /// otherwise the new value.
    pub async fn toggle_complete(&self, id: &TodoId) -> ControllerResult<Option<bool>> {
        let Some(current) = self.state.read(|list| list.get(id).map(|t| t.completed)) else {
            debug!("Toggle for unknown todo {}", id);
            return Ok(None);
        };
        let patch = TodoPatch::completed(!current);
        self.gateway
            .update_by_id(id, &patch)
            .await
            .map_err(|e| self.write_failed(WriteAction::Toggle, e))?;
        self.state.write(|list| {
            list.apply_patch(id, &patch);
        });
        debug!("Todo {} completed={}", id, !current);
        Ok(Some(!current))
    }

    pub async fn remove(&self, id: &TodoId) -> ControllerResult<()> {
        self.gateway
            .delete_by_id(id)
            .await
            .map_err(|e| self.write_failed(WriteAction::Delete, e))?;
        self.state.write(|list| {
            list.remove(id);
        });
        debug!("Deleted todo {}", id);
        Ok(())
    }

    /// Delete every completed todo in one call. Returns how many were removed; 0 sends nothing.
    pub async fn clear_completed(&self) -> ControllerResult<usize> {
        let ids = self.state.read(|list| list.completed_ids());
        if ids.is_empty() {
            return Ok(0);
        }
        self.gateway
            .delete_by_ids(&ids)
            .await
            .map_err(|e| self.write_failed(WriteAction::ClearCompleted, e))?;
        let mut removed = 0;
        self.state.write(|list| removed = list.remove_ids(&ids));
        info!("Cleared {} completed todos", removed);
        Ok(removed)
    }

    pub async fn set_priority(&self, id: &TodoId, priority: Priority) -> ControllerResult<()> {
        let patch = TodoPatch::priority(priority);
        self.gateway
            .update_by_id(id, &patch)
            .await
            .map_err(|e| self.write_failed(WriteAction::SetPriority, e))?;
        self.state.write(|list| {
            list.apply_patch(id, &patch);
        });
        debug!("Todo {} priority={}", id, priority);
        Ok(())
    }

    fn write_failed(&self, action: WriteAction, source: crate::domain::GatewayError) -> ControllerError {
        error!("Error trying to {}: {}", action, source);
        ControllerError::write(action, source)
    }
}
