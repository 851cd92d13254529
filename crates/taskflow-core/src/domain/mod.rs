//! Domain Layer
//!
//! The todo record, its insert/update payloads and the status filter.
//! Nothing here talks to the remote store.

mod todo;
mod filter;
mod error;

pub use todo::{Todo, TodoId, NewTodo, TodoPatch, Priority, CATEGORY_SUGGESTIONS, DEFAULT_CATEGORY};
pub use filter::StatusFilter;
pub use error::{GatewayError, GatewayResult, ControllerError, WriteAction};
