//! UI Components
//!
//! Reusable Leptos components.

mod header;
mod stats;
mod new_todo_form;
mod selectors;
mod search_filter_bar;
mod todo_list;
mod todo_item;
mod delete_confirm_button;
mod toast_host;

pub use header::AppHeader;
pub use stats::{StatsCards, ProgressPanel};
pub use new_todo_form::NewTodoForm;
pub use selectors::{PrioritySelect, CategorySelect};
pub use search_filter_bar::SearchFilterBar;
pub use todo_list::TodoListView;
pub use todo_item::TodoItem;
pub use delete_confirm_button::DeleteConfirmButton;
pub use toast_host::ToastHost;
