//! # client
//!
//! Leptos + WASM frontend for the SmartCar vehicle-access panel.
//!
//! Pages, layout components and the browser bindings of the `session`
//! contract: `localStorage` for the session store, `gloo-net` for the
//! login exchange and guarded API calls, and `leptos_router` for the
//! role-based route guard.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app on `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(app::App);
}
