//! TaskFlow Core
//!
//! Layered like the app around it:
//! - domain: todo record, payloads, errors
//! - gateway: remote store contract and implementations
//! - state: the session's todo list and its injectable owner
//! - controller: gateway-confirmed mutations
//! - views / notice: derived data and user messages for the UI

pub mod config;
pub mod controller;
pub mod domain;
pub mod gateway;
pub mod notice;
pub mod state;
pub mod views;

#[cfg(test)]
mod fixtures;

pub use config::{ConfigError, GatewayConfig};
pub use controller::{ControllerResult, ListController};
pub use domain::{
    ControllerError, GatewayError, GatewayResult, NewTodo, Priority, StatusFilter, Todo, TodoId, TodoPatch,
    WriteAction, CATEGORY_SUGGESTIONS, DEFAULT_CATEGORY,
};
pub use gateway::{Gateway, GatewayOp, MemoryGateway, RestGateway};
pub use notice::{Notice, NoticeKind};
pub use state::{LocalTodoState, TodoList, TodoState};
pub use views::{format_created_at, format_created_at_local, Counts, PriorityHistogram};
