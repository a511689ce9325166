//! Todo Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod edit_form;
mod models;
mod pages;
mod routes;
mod store;
mod tasks;
mod view_model;

use app::App;
use leptos::prelude::*;

/// Lines of diagnostics kept in memory
const LOG_HISTORY: usize = 200;

fn main() {
    console_error_panic_hook::set_once();
    let logger = rolling_logger::init(log::LevelFilter::Debug, LOG_HISTORY).ok();
    mount_to_body(move || view! { <App logger=logger /> });
}
