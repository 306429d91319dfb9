//! # client
//!
//! Leptos + WASM frontend for the image gallery. Users upload, browse, and
//! delete their images; admins manage accounts from a dashboard.
//!
//! This crate contains pages, components, application state, data hooks, and
//! the REST service layer. The host binary renders it with SSR and the browser
//! hydrates it through [`hydrate`].

#![recursion_limit = "256"]
pub mod app;
pub mod components;
pub mod config;
pub mod hooks;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: read the API config from the SSR shell and hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let config = config::ApiConfig::from_document();
    log::info!("hydrating against {}", config.base_url());

    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <app::App/> }
    });
}
