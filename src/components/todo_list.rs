//! Todo List Component
//!
//! The filtered list, its summary line and the clear-completed action.

use leptos::prelude::*;
use taskflow_core::Todo;

use crate::components::TodoItem;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TodoListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let term = store.search_term().get();
        let filter = store.status_filter().get();
        store
            .todos()
            .read()
            .filtered(&term, filter)
            .into_iter()
            .cloned()
            .collect::<Vec<Todo>>()
    });
    let has_completed = move || store.todos().read().has_completed();

    let summary = move || match visible.with(|v| v.len()) {
        0 => "조건에 맞는 할 일이 없습니다".to_string(),
        n => format!("{}개의 작업이 등록되어 있습니다", n),
    };

    view! {
        <div class="todo-list-card">
            <div class="todo-list-header">
                <h2>"할 일 목록"</h2>
                <Show when=has_completed>
                    <button class="clear-completed-btn" on:click=move |_| ctx.clear_completed()>
                        "완료된 항목 삭제"
                    </button>
                </Show>
            </div>
            <p class="todo-list-summary">{summary}</p>

            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <EmptyState /> }
            >
                <ul class="todo-list">
                    <For
                        each=move || visible.get()
                        // Key on every mutable field so a patched record re-renders
                        key=|todo| (todo.id.clone(), todo.completed, todo.priority)
                        children=move |todo| view! { <TodoItem todo=todo /> }
                    />
                </ul>
            </Show>
        </div>
    }
}

#[component]
fn EmptyState() -> impl IntoView {
    view! {
        <div class="empty-state">
            <p class="empty-title">"할 일 목록이 비어있습니다"</p>
            <p class="empty-caption">"새로운 작업을 추가하여 시작해보세요!"</p>
        </div>
    }
}
