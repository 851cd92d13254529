#![allow(warnings)]
//! TaskFlow Frontend Entry Point

mod config;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

/// Recent log records kept for diagnostics
const LOG_CAPACITY: usize = 500;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init(LOG_CAPACITY, level) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", e).into());
    }
    mount_to_body(App);
}
