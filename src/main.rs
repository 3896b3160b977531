#![allow(warnings)]
//! ModeMap Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod map;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(console_logger::default_level()) {
        web_sys::console::error_1(&format!("logger already set: {}", err).into());
    }
    mount_to_body(App);
}
