//! Todo Frontend Entry Point

mod models;
mod config;
mod error;
mod logging;
mod api;
mod store;
mod edit_state;
mod summary;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
