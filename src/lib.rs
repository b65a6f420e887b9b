//! # rulechat
//!
//! Leptos + WASM frontend for the board-game rules assistant. The user
//! names a game, uploads its rulebook PDF, and chats with an AI that
//! answers with page-referenced sources. Document ingestion and question
//! answering live in an external backend reached over three HTTP
//! endpoints; this crate is routing, state, and the calls that glue them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook, wire up console logging,
/// and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
