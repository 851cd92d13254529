//! Selector Components
//!
//! Priority and category `<select>`s shared by the form and the list rows.

use leptos::prelude::*;
use taskflow_core::{Priority, CATEGORY_SUGGESTIONS};

/// Priority options, lowest first
const PRIORITY_OPTIONS: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

#[component]
pub fn PrioritySelect(
    #[prop(into)] value: Signal<Priority>,
    #[prop(into)] on_change: Callback<Priority>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    view! {
        <select
            class=if compact { "priority-select compact" } else { "priority-select" }
            prop:value=move || value.get().as_str()
            on:change=move |ev| {
                let select = event_target::<web_sys::HtmlSelectElement>(&ev);
                let picked = Priority::parse(&select.value());
                // Shows the bound value until the owner confirms the change
                select.set_value(value.get_untracked().as_str());
                if let Some(priority) = picked {
                    on_change.run(priority);
                }
            }
        >
            {PRIORITY_OPTIONS.iter().map(|priority| {
                let priority = *priority;
                view! {
                    <option value=priority.as_str() selected=move || value.get() == priority>
                        {priority.label()}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

#[component]
pub fn CategorySelect(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="category-select"
            prop:value=move || value.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {CATEGORY_SUGGESTIONS.iter().map(|category| {
                let category = *category;
                view! {
                    <option value=category selected=move || value.with(|v| v == category)>
                        {category}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
