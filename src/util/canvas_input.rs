//! Pointer event translation for the floor-plan host.

#[cfg(feature = "hydrate")]
use floorplan::transform::Point;

/// Viewport-local position of a pointer event, in CSS pixels. Matches the
/// screen space the engine hit-tests in, so no further conversion applies.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}
