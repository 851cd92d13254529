//! Toast Host Component
//!
//! Renders queued notices; click to dismiss early.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let toasts = ctx.toasts();

    view! {
        <div class="toast-host" role="status">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notice.is_error() { "toast error" } else { "toast" };
                    view! {
                        <div
                            class=class
                            on:click=move |_| ctx.dismiss(id)
                        >
                            {toast.notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
