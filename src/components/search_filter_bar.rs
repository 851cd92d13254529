//! Search and Filter Bar Component
//!
//! Free-text search plus the all/active/completed tabs.

use leptos::prelude::*;
use taskflow_core::StatusFilter;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchFilterBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="search-filter-bar">
            <input
                type="search"
                class="search-input"
                placeholder="할 일 목록에서 검색"
                prop:value=move || store.search_term().get()
                on:input=move |ev| store.search_term().set(event_target_value(&ev))
            />

            <div class="filter-tabs">
                {StatusFilter::ALL.iter().map(|filter| {
                    let filter = *filter;
                    let is_active = move || store.status_filter().get() == filter;
                    view! {
                        <button
                            type="button"
                            class=move || if is_active() { "filter-tab active" } else { "filter-tab" }
                            on:click=move |_| store.status_filter().set(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
