//! Kaarya Frontend Entry Point

mod app;
mod auth;
mod bridge;
mod cloud;
mod components;
mod context;
mod error;
mod models;
mod records;
mod router;
mod state;
mod stats;
mod storage;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
