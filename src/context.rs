//! Application Context
//!
//! Shared handles provided via Leptos Context API: the list controller, the
//! store and the toast queue. Each action runs the controller call on the
//! local executor and turns the outcome into a toast.

use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taskflow_core::{ControllerError, Gateway, ListController, Notice, Priority, TodoId};

use crate::store::{AppStateStoreFields, AppStore, StoreTodoState};

/// How long a toast stays on screen
const TOAST_MS: u32 = 3_000;

pub type UiController = ListController<Rc<dyn Gateway>, StoreTodoState>;

/// A notice on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub notice: Notice,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<UiController, LocalStorage>,
    store: AppStore,
    toasts: RwSignal<Vec<Toast>>,
    next_toast_id: StoredValue<u32>,
}

impl AppContext {
    pub fn new(controller: UiController, store: AppStore) -> Self {
        Self {
            controller: StoredValue::new_local(controller),
            store,
            toasts: RwSignal::new(Vec::new()),
            next_toast_id: StoredValue::new(0),
        }
    }

    fn controller(&self) -> UiController {
        self.controller.get_value()
    }

    /// Toasts currently shown
    pub fn toasts(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts.read_only()
    }

    /// Show a toast and schedule its removal
    pub fn notify(&self, notice: Notice) {
        let id = self.next_toast_id.get_value();
        self.next_toast_id.set_value(id.wrapping_add(1));
        self.toasts.update(|toasts| toasts.push(Toast { id, notice }));

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MS).await;
            let _ = toasts.try_update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u32) {
        self.toasts.update(|toasts| toasts.retain(|t| t.id != id));
    }

    fn report(&self, err: &ControllerError) {
        self.notify(Notice::from_error(err));
    }

    /// Initial fetch; clears the loading flag however it ends
    pub fn load(&self) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            if let Err(err) = controller.load().await {
                ctx.report(&err);
            }
            ctx.store.loading().set(false);
        });
    }

    /// Create a todo; `on_done(true)` only when it was stored
    pub fn add(&self, title: String, priority: Priority, category: String, on_done: impl FnOnce(bool) + 'static) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            match controller.add(&title, priority, &category).await {
                Ok(Some(_)) => {
                    ctx.notify(Notice::added());
                    on_done(true);
                }
                Ok(None) => on_done(false),
                Err(err) => {
                    ctx.report(&err);
                    on_done(false);
                }
            }
        });
    }

    pub fn toggle(&self, id: TodoId) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            match controller.toggle_complete(&id).await {
                Ok(Some(completed)) => ctx.notify(Notice::toggled(completed)),
                Ok(None) => {}
                Err(err) => ctx.report(&err),
            }
        });
    }

    pub fn remove(&self, id: TodoId) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            match controller.remove(&id).await {
                Ok(()) => ctx.notify(Notice::deleted()),
                Err(err) => ctx.report(&err),
            }
        });
    }

    pub fn set_priority(&self, id: TodoId, priority: Priority) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            match controller.set_priority(&id, priority).await {
                Ok(()) => ctx.notify(Notice::priority_changed()),
                Err(err) => ctx.report(&err),
            }
        });
    }

    pub fn clear_completed(&self) {
        let ctx = *self;
        let controller = self.controller();
        spawn_local(async move {
            match controller.clear_completed().await {
                Ok(0) => {}
                Ok(count) => ctx.notify(Notice::cleared(count)),
                Err(err) => ctx.report(&err),
            }
        });
    }
}
