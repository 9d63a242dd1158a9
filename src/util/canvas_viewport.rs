//! Canvas viewport synchronization helpers shared by the floor-plan host.
//!
//! These helpers bridge the Leptos reactive world and the imperative canvas
//! engine. They are all `#[cfg(feature = "hydrate")]` because they depend on
//! `web_sys` and node refs that only exist in the browser.

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use floorplan::engine::Engine;

/// Read the canvas element's CSS dimensions and device pixel ratio, then
/// push them to the engine.
///
/// Must be called before every render and hit-test so coordinate transforms
/// stay accurate across window resizes and hidden tabs. Uses CSS pixel
/// dimensions (`client_width` / `client_height`); the engine multiplies by
/// DPR internally when sizing the canvas backing store. A zero-sized canvas
/// is passed through unchanged — the engine treats it as "nothing to draw"
/// rather than dividing by it.
#[cfg(feature = "hydrate")]
pub fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(canvas) = canvas_ref.get() else {
        return;
    };
    let width = f64::from(canvas.client_width());
    let height = f64::from(canvas.client_height());
    let dpr = window.device_pixel_ratio().max(1.0);
    engine.set_viewport(width, height, dpr);
}

/// Return the current wall-clock time in milliseconds via the JS `Date.now()`
/// API. Drives the pulse phase.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
