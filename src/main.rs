//! Food Share Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod models;
mod pages;
mod store;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Food Share frontend starting...");
    mount_to_body(App);
}
