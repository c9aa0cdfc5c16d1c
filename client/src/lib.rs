//! # client
//!
//! Leptos + WASM frontend for the singly linked list explainer.
//!
//! This crate contains the topic content table, page state, components and
//! browser utilities. The server renders it with the `ssr` feature; the
//! browser bundle is built with `hydrate` and enters through `hydrate()`.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach the app to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
