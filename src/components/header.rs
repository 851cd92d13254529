//! App Header Component
//!
//! Title plus today/active badges and the store connection indicator.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AppHeader() -> impl IntoView {
    let store = use_app_store();

    let today_count = move || store.todos().read().today_bucket().len();
    let active_count = move || store.todos().read().counts().active;
    let demo_mode = move || store.demo_mode().get();

    view! {
        <header class="app-header">
            <div class="app-title">
                <h1>"TaskFlow Pro"</h1>
                <p class="app-subtitle">"할 일 목록으로 일정과 작업을 체계적으로 관리하세요"</p>
            </div>
            <div class="header-badges">
                <span class="badge outline">{move || format!("{}개 오늘 추가", today_count())}</span>
                <span class="badge secondary">{move || format!("{}개 진행중", active_count())}</span>
                <span
                    class=move || if demo_mode() { "status-dot demo" } else { "status-dot online" }
                    title=move || if demo_mode() { "데모 모드 (저장되지 않음)" } else { "원격 저장소 연결됨" }
                ></span>
            </div>
        </header>
    }
}
