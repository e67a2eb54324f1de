//! # taskdeck
//!
//! Leptos + WASM client for a task/project management REST API.
//!
//! The client authenticates against the backend, keeps the bearer-token
//! session in `localStorage`, and renders CRUD pages (dashboard, tasks,
//! projects, create/edit forms) behind a client-side route guard. All
//! persistence lives on the server; this crate is the view layer plus the
//! session/request plumbing.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(crate::app::App);
}
