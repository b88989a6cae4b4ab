//! Task Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod models;
mod state;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    init_tracing();
    mount_to_body(App);
}

/// Send tracing events to the browser console
#[cfg(target_arch = "wasm32")]
fn init_tracing() {
    let level = if cfg!(debug_assertions) { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let config = tracing_wasm::WASMLayerConfigBuilder::new().set_max_level(level).build();
    tracing_wasm::set_as_global_default_with_config(config);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() {}
