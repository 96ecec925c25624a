//! # client
//!
//! Leptos + WASM account console for the CodePush backend: registration,
//! login, session restore, and a dashboard showing the account's app id,
//! access token and profile.
//!
//! The session state machine, wire types and error type come from the
//! `session` crate; this crate supplies the browser transport (`gloo-net`),
//! `localStorage` token persistence, and the UI.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
