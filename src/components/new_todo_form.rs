//! New Todo Form Component
//!
//! Title input with priority and category selectors. Enter submits.

use leptos::prelude::*;
use taskflow_core::{Priority, DEFAULT_CATEGORY};

use crate::components::{CategorySelect, PrioritySelect};
use crate::context::AppContext;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_title, set_new_title) = signal(String::new());
    let (priority, set_priority) = signal(Priority::default());
    let (category, set_category) = signal(DEFAULT_CATEGORY.to_string());
    let (submitting, set_submitting) = signal(false);

    let is_blank = move || new_title.with(|t| t.trim().is_empty());

    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_blank() || submitting.get() { return; }
        set_submitting.set(true);
        // Input is cleared only once the store confirmed the insert
        ctx.add(new_title.get(), priority.get(), category.get(), move |added| {
            if added {
                set_new_title.set(String::new());
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form class="new-todo-form" on:submit=create_todo>
            <h2>"새로운 할 일 추가"</h2>
            <div class="new-todo-row">
                <input
                    type="text"
                    placeholder="할 일을 입력하세요 (예: 회의 준비, 보고서 작성)"
                    prop:value=move || new_title.get()
                    on:input=move |ev| set_new_title.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || is_blank() || submitting.get()>"추가"</button>
            </div>

            <div class="selector-row">
                <label>
                    <span>"우선순위"</span>
                    <PrioritySelect value=priority on_change=move |p: Priority| set_priority.set(p) />
                </label>
                <label>
                    <span>"카테고리"</span>
                    <CategorySelect value=category on_change=move |c: String| set_category.set(c) />
                </label>
            </div>
        </form>
    }
}
