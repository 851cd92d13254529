//! Todo Item Component
//!
//! One row: completion toggle, title, badges, priority select, delete.

use leptos::prelude::*;
use taskflow_core::{format_created_at_local, Priority, Todo};

use crate::components::{DeleteConfirmButton, PrioritySelect};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoItem(todo: Todo) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let Todo { id, title, completed, created_at, priority, category, .. } = todo;
    let toggle_id = id.clone();
    let priority_id = id.clone();
    let delete_id = id.clone();
    let stored_priority = Signal::derive(move || {
        store.todos().read().priority_of(&id).unwrap_or(priority)
    });

    view! {
        <li class=if completed { "todo-item completed" } else { "todo-item" }>
            <button
                class=if completed { "toggle-btn checked" } else { "toggle-btn" }
                title=if completed { "진행중으로 변경" } else { "완료로 표시" }
                on:click=move |_| ctx.toggle(toggle_id.clone())
            >
                {if completed { "✓" } else { "" }}
            </button>

            <div class="todo-body">
                <span class="todo-title">{title}</span>
                <div class="todo-meta">
                    <span class=format!("badge priority-{}", priority.as_str())>{priority.label()}</span>
                    <span class="badge category">{category}</span>
                    <span class="todo-date">{format_created_at_local(&created_at)}</span>
                </div>
            </div>

            <div class="todo-actions">
                <PrioritySelect
                    value=stored_priority
                    on_change=move |p: Priority| ctx.set_priority(priority_id.clone(), p)
                    compact=true
                />
                <DeleteConfirmButton
                    button_class="delete-btn"
                    on_confirm=move |_| ctx.remove(delete_id.clone())
                />
            </div>
        </li>
    }
}
