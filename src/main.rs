//! InfoMetrics Dashboard Entry Point

mod api;
mod app;
mod components;
mod config;
mod error;
mod expansion;
mod format;
mod grouping;
mod hooks;
mod models;
mod pages;
mod queries;
mod sanitize;

use app::App;
use leptos::prelude::*;

fn main() {
    // Panics in the component tree surface in the console instead of
    // silently blanking the page.
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
