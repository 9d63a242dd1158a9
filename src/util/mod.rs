//! Shared helpers for bridging Leptos and the canvas engine.

pub mod canvas_input;
pub mod canvas_viewport;
