//! Itens front-end entry point.

mod app;
mod components;
mod services;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
