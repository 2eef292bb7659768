//! # taxchat
//!
//! Leptos + WASM chat client for a tax-law answering service.
//!
//! The core is the conversation session orchestrator in [`state`]: it tracks
//! multiple chat threads, dispatches queries, reconciles asynchronous replies
//! into the thread each request was issued for, and supports in-place
//! edit-and-regenerate of prior exchanges. The session token is the only
//! durable client-side state; conversations live in memory and are lost on
//! reload by design.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
