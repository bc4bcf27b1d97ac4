//! # client
//!
//! Leptos + WASM frontend for the Code4College interactive learning site.
//!
//! This crate contains the session state machine, the live preview and
//! assistant engines, the content-service client, and the pages and
//! components that render them. The root crate serves it with SSR.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging, read the shell config, hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::ClientConfig::from_document();
    leptos::mount::hydrate_body(move || leptos::view! { <app::App config/> });
}
