//! # client
//!
//! Leptos + WASM frontend for Harmony Hunt, the song-guessing game.
//!
//! This crate contains the route table, pages, the "Connect with Spotify"
//! login button, browser-side game state, and the HTTP helpers that talk to
//! the game server on `127.0.0.1:5000`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
