//! # cheatcore-storefront
//!
//! Leptos + WASM storefront for time-limited software license keys.
//!
//! Every page is a thin view over the backend REST API at `/api`. The two
//! stateful flows live in `state/`: the session/auth holder shared through
//! context, and the checkout confirmation poller. Everything else is
//! request-and-render view code in `pages/` and `components/`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Hydration entry point invoked by the WASM loader.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
