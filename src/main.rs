//! Cat Swipe Frontend Entry Point

mod models;
mod error;
mod config;
mod session;
mod services;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
