//! # atrium
//!
//! Leptos + WASM frontend for the building-access floor-plan viewer.
//!
//! This crate contains pages, components, application state, and the REST
//! client for the access-management API. It integrates with the `floorplan`
//! crate for imperative canvas rendering via the `FloorPlanHost` bridge
//! component.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install panic/log hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed; keep going with the existing one.
    }
    leptos::mount::hydrate_body(app::App);
}
