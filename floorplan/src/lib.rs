//! Floor-plan rendering and hit-testing engine for the access viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! canvas side of the floor view: fitting the floor-plan image into the
//! viewport, drawing door markers colored by door and lock status, pulsing a
//! halo on active doors, and resolving pointer clicks to doors. The host
//! Leptos layer is responsible for fetching floor data, feeding it into the
//! engine, and driving redraws.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`scene`] | Doors, marker coordinates, and the in-memory scene store |
//! | [`transform`] | Fit-and-center view transform and coordinate conversion |
//! | [`hit`] | Hit-testing pointer positions against drawn markers |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`consts`] | Shared numeric and color constants |

pub mod consts;
pub mod engine;
pub mod hit;
pub mod render;
pub mod scene;
pub mod transform;
