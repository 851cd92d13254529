//! TaskFlow Frontend App
//!
//! Main application component: header, stat cards, list column and sidebar.

use leptos::prelude::*;
use reactive_stores::Store;
use taskflow_core::ListController;

use crate::config;
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields, StoreTodoState};
use crate::components::{AppHeader, NewTodoForm, ProgressPanel, SearchFilterBar, StatsCards, ToastHost, TodoListView};

#[component]
pub fn App() -> impl IntoView {
    let (gateway, demo_mode) = config::connect();

    // State
    let store = Store::new(AppState::new(demo_mode));
    provide_context(store);

    let controller = ListController::new(gateway, StoreTodoState(store));
    let ctx = AppContext::new(controller, store);
    provide_context(ctx);

    // Load todos on mount
    Effect::new(move |_| ctx.load());

    view! {
        <Show
            when=move || !store.loading().get()
            fallback=|| view! { <LoadingScreen /> }
        >
            <div class="app-layout">
                <AppHeader />

                <main class="main-content">
                    <StatsCards />

                    <div class="content-grid">
                        <section class="todo-column">
                            <NewTodoForm />
                            <SearchFilterBar />
                            <TodoListView />
                        </section>

                        <ProgressPanel />
                    </div>
                </main>
            </div>
        </Show>

        <ToastHost />
    }
}

#[component]
fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="spinner"></div>
            <p>"TaskFlow Pro 로딩 중..."</p>
        </div>
    }
}
