//! Todo Detail Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod detail;
mod edit_form;
mod controller;
mod dom;
mod host;
mod context;
mod components;
mod app;

fn main() {
    console_error_panic_hook::set_once();
    app::mount();
}
