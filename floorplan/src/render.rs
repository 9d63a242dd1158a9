//! Rendering: draws the floor-plan scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives read-only views of engine state and produces pixels — it does
//! not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::consts::{
    COLOR_LABEL_INK, COLOR_LABEL_PLATE, COLOR_SELECTION, HALO_ALPHA, HALO_AMPLITUDE_PX,
    HALO_BASE_OFFSET_PX, HALO_PERIOD_MS, LABEL_FONT_PX, LABEL_GAP_PX, LABEL_PAD_X_PX,
    MARKER_RADIUS_PX,
};
use crate::engine::EngineCore;
use crate::scene::Marker;
use crate::transform::{Point, ViewTransform};

/// Selection ring stroke width in screen pixels.
const SELECTION_RING_WIDTH_PX: f64 = 2.0;

/// Gap between the marker edge and the selection ring.
const SELECTION_RING_OFFSET_PX: f64 = 3.0;

/// Blank the whole drawing surface.
pub fn clear(ctx: &CanvasRenderingContext2d, viewport_w: f64, viewport_h: f64, dpr: f64) {
    if ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0).is_ok() {
        ctx.clear_rect(0.0, 0.0, viewport_w, viewport_h);
    }
}

/// Halo radius at `now_ms`: a sinusoidal pulse around the base halo radius.
/// Purely cosmetic — hit-testing always uses [`MARKER_RADIUS_PX`].
#[must_use]
pub fn halo_radius(now_ms: f64) -> f64 {
    let phase = (now_ms / HALO_PERIOD_MS) * 2.0 * PI;
    MARKER_RADIUS_PX + HALO_BASE_OFFSET_PX + HALO_AMPLITUDE_PX * phase.sin()
}

/// Draw the full scene: background image, door markers, halos, and labels.
///
/// `now_ms` is wall-clock time in milliseconds driving the pulse phase.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    core: &EngineCore,
    image: &HtmlImageElement,
    transform: ViewTransform,
    now_ms: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear and scale for the device pixel ratio. Marker geometry
    // below is in CSS pixels; the transform handles image fitting.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, core.viewport_width, core.viewport_height);

    // Layer 2: the floor plan, fitted and centered.
    let image_w = f64::from(image.natural_width());
    let image_h = f64::from(image.natural_height());
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        image,
        transform.offset_x,
        transform.offset_y,
        image_w * transform.scale,
        image_h * transform.scale,
    )?;

    // Layer 3: markers in the same order hit-testing consumes.
    let selected = core.selection();
    for marker in core.scene.visible_markers() {
        let center = transform.image_to_screen(marker.coordinate.as_point());
        if marker.door.pulses() {
            draw_halo(ctx, &marker, center, now_ms)?;
        }
        draw_marker(ctx, &marker, center)?;
        if selected == Some(marker.door.id) {
            draw_selection_ring(ctx, center)?;
        }
        draw_label(ctx, &marker, center)?;
    }

    Ok(())
}

// =============================================================
// Marker renderers
// =============================================================

fn draw_marker(ctx: &CanvasRenderingContext2d, marker: &Marker<'_>, center: Point) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, MARKER_RADIUS_PX, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(marker.door.marker_color());
    ctx.fill();
    Ok(())
}

fn draw_halo(
    ctx: &CanvasRenderingContext2d,
    marker: &Marker<'_>,
    center: Point,
    now_ms: f64,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_global_alpha(HALO_ALPHA);
    ctx.begin_path();
    ctx.arc(center.x, center.y, halo_radius(now_ms), 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(marker.door.marker_color());
    ctx.fill();
    ctx.restore();
    Ok(())
}

fn draw_selection_ring(ctx: &CanvasRenderingContext2d, center: Point) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(center.x, center.y, MARKER_RADIUS_PX + SELECTION_RING_OFFSET_PX, 0.0, 2.0 * PI)?;
    ctx.set_stroke_style_str(COLOR_SELECTION);
    ctx.set_line_width(SELECTION_RING_WIDTH_PX);
    ctx.stroke();
    Ok(())
}

// =============================================================
// Labels
// =============================================================

/// Name label anchored to the right of the marker, over an opaque plate
/// sized to the measured text width so it stays legible on any background.
fn draw_label(ctx: &CanvasRenderingContext2d, marker: &Marker<'_>, center: Point) -> Result<(), JsValue> {
    let name = marker.door.name.as_str();
    if name.is_empty() {
        return Ok(());
    }

    ctx.save();
    ctx.set_font(&format!("{LABEL_FONT_PX:.0}px sans-serif"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    let text_w = measured_text_width(ctx, name);
    let plate_x = center.x + MARKER_RADIUS_PX + LABEL_GAP_PX;
    let plate_h = LABEL_FONT_PX + 4.0;
    let plate_y = center.y - plate_h / 2.0;

    ctx.set_fill_style_str(COLOR_LABEL_PLATE);
    ctx.fill_rect(plate_x, plate_y, text_w + LABEL_PAD_X_PX * 2.0, plate_h);

    ctx.set_fill_style_str(COLOR_LABEL_INK);
    ctx.fill_text(name, plate_x + LABEL_PAD_X_PX, center.y)?;

    ctx.restore();
    Ok(())
}

fn measured_text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    match ctx.measure_text(text) {
        Ok(metrics) => metrics.width(),
        Err(_) => 0.0,
    }
}
