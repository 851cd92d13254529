//! Stats Components
//!
//! Stat cards above the list and the progress sidebar.

use leptos::prelude::*;
use taskflow_core::Priority;

use crate::store::{use_app_store, AppStateStoreFields};

/// Total / completed / active / high-priority cards
#[component]
pub fn StatsCards() -> impl IntoView {
    let store = use_app_store();
    let counts = Memo::new(move |_| store.todos().read().counts());
    let high = move || store.todos().read().priority_histogram().high;

    view! {
        <div class="stats-cards">
            <StatCard label="전체 할 일" variant="stat-card total" value=Signal::derive(move || counts.get().total) />
            <StatCard label="완료됨" variant="stat-card completed" value=Signal::derive(move || counts.get().completed) />
            <StatCard label="진행중" variant="stat-card active" value=Signal::derive(move || counts.get().active) />
            <StatCard label="높은 우선순위" variant="stat-card high" value=Signal::derive(high) />
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, variant: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class=variant>
            <p class="stat-label">{label}</p>
            <p class="stat-value">{move || value.get()}</p>
        </div>
    }
}

/// Sidebar: completion progress, open todos per priority, today's todos
#[component]
pub fn ProgressPanel() -> impl IntoView {
    let store = use_app_store();
    let percent = move || store.todos().read().counts().progress_percent();
    let histogram = Memo::new(move |_| store.todos().read().priority_histogram());
    let today_count = move || store.todos().read().today_bucket().len();

    view! {
        <aside class="progress-panel">
            <section class="panel-card">
                <h3>"할 일 진행률 추적"</h3>
                <div class="progress-row">
                    <span>"전체 진행률"</span>
                    <span>{move || format!("{}%", percent())}</span>
                </div>
                <div class="progress-track">
                    <div class="progress-fill" style=move || format!("width: {}%;", percent())></div>
                </div>

                {Priority::ALL.iter().map(|priority| {
                    let priority = *priority;
                    view! {
                        <div class=format!("histogram-row priority-{}", priority.as_str())>
                            <span>{format!("{} 우선순위", priority.label())}</span>
                            <span class="histogram-count">{move || histogram.get().get(priority)}</span>
                        </div>
                    }
                }).collect_view()}
            </section>

            <section class="panel-card">
                <h3>"오늘의 일정 관리"</h3>
                <p class="today-count">{today_count}</p>
                <p class="today-caption">"오늘 추가된 작업 목록"</p>
            </section>
        </aside>
    }
}
