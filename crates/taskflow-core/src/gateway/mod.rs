//! Gateway Layer - Remote Store Contract
//!
//! The capability the controller persists through. Implementations:
//! - `RestGateway`: PostgREST/Supabase over HTTP
//! - `MemoryGateway`: in-process table for tests and demo mode

mod memory;
mod rest;

use std::rc::Rc;

use async_trait::async_trait;

use crate::domain::{GatewayResult, NewTodo, Todo, TodoId, TodoPatch};

pub use memory::{GatewayOp, MemoryGateway};
pub use rest::RestGateway;

/// CRUD access to the remote `todos` table
///
/// Futures are `!Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Gateway {
    /// Insert a record and return it as stored (with `id` and `created_at`)
    async fn insert(&self, record: &NewTodo) -> GatewayResult<Todo>;

    /// Every record, newest `created_at` first
    async fn select_all_newest_first(&self) -> GatewayResult<Vec<Todo>>;

    /// Apply a partial update to one record
    async fn update_by_id(&self, id: &TodoId, patch: &TodoPatch) -> GatewayResult<()>;

    async fn delete_by_id(&self, id: &TodoId) -> GatewayResult<()>;

    /// Delete every record whose id is in `ids`
    async fn delete_by_ids(&self, ids: &[TodoId]) -> GatewayResult<()>;
}

#[async_trait(?Send)]
impl<G: Gateway + ?Sized> Gateway for Rc<G> {
    async fn insert(&self, record: &NewTodo) -> GatewayResult<Todo> {
        (**self).insert(record).await
    }

    async fn select_all_newest_first(&self) -> GatewayResult<Vec<Todo>> {
        (**self).select_all_newest_first().await
    }

    async fn update_by_id(&self, id: &TodoId, patch: &TodoPatch) -> GatewayResult<()> {
        (**self).update_by_id(id, patch).await
    }

    async fn delete_by_id(&self, id: &TodoId) -> GatewayResult<()> {
        (**self).delete_by_id(id).await
    }

    async fn delete_by_ids(&self, ids: &[TodoId]) -> GatewayResult<()> {
        (**self).delete_by_ids(ids).await
    }
}
