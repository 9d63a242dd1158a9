#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- fit ---

#[test]
fn fit_wide_image_in_square_viewport() {
    // 1000x500 plan in a 500x500 viewport.
    let t = ViewTransform::fit(500.0, 500.0, 1000.0, 500.0).unwrap();
    assert!(approx_eq(t.scale, 0.5));
    assert!(approx_eq(t.offset_x, 0.0));
    assert!(approx_eq(t.offset_y, 125.0));
}

#[test]
fn fit_tall_image_in_square_viewport() {
    let t = ViewTransform::fit(500.0, 500.0, 500.0, 1000.0).unwrap();
    assert!(approx_eq(t.scale, 0.5));
    assert!(approx_eq(t.offset_x, 125.0));
    assert!(approx_eq(t.offset_y, 0.0));
}

#[test]
fn fit_exact_match_is_identity() {
    let t = ViewTransform::fit(800.0, 600.0, 800.0, 600.0).unwrap();
    assert!(approx_eq(t.scale, 1.0));
    assert!(approx_eq(t.offset_x, 0.0));
    assert!(approx_eq(t.offset_y, 0.0));
}

#[test]
fn fit_upscales_small_image() {
    let t = ViewTransform::fit(1000.0, 1000.0, 100.0, 50.0).unwrap();
    assert!(approx_eq(t.scale, 10.0));
    assert!(approx_eq(t.offset_x, 0.0));
    assert!(approx_eq(t.offset_y, 250.0));
}

#[test]
fn fit_never_overflows_viewport() {
    let cases = [
        (500.0, 500.0, 1000.0, 500.0),
        (333.0, 777.0, 1024.0, 768.0),
        (1920.0, 1080.0, 640.0, 480.0),
        (10.0, 10.0, 10_000.0, 3.0),
    ];
    for (vw, vh, iw, ih) in cases {
        let t = ViewTransform::fit(vw, vh, iw, ih).unwrap();
        assert!(t.scale * iw <= vw + EPSILON, "width overflow for {vw}x{vh} / {iw}x{ih}");
        assert!(t.scale * ih <= vh + EPSILON, "height overflow for {vw}x{vh} / {iw}x{ih}");
        assert!(t.offset_x >= -EPSILON);
        assert!(t.offset_y >= -EPSILON);
    }
}

#[test]
fn fit_zero_viewport_width_is_none() {
    assert!(ViewTransform::fit(0.0, 500.0, 1000.0, 500.0).is_none());
}

#[test]
fn fit_zero_viewport_height_is_none() {
    assert!(ViewTransform::fit(500.0, 0.0, 1000.0, 500.0).is_none());
}

#[test]
fn fit_zero_image_is_none() {
    assert!(ViewTransform::fit(500.0, 500.0, 0.0, 0.0).is_none());
}

#[test]
fn fit_negative_dimension_is_none() {
    assert!(ViewTransform::fit(500.0, -1.0, 1000.0, 500.0).is_none());
}

#[test]
fn fit_non_finite_dimension_is_none() {
    assert!(ViewTransform::fit(f64::NAN, 500.0, 1000.0, 500.0).is_none());
    assert!(ViewTransform::fit(500.0, 500.0, f64::INFINITY, 500.0).is_none());
}

// --- image_to_screen ---

#[test]
fn image_to_screen_wide_plan_scenario() {
    // Marker at (200, 100) on a 1000x500 plan in a 500x500 viewport
    // must land at screen (100, 175).
    let t = ViewTransform::fit(500.0, 500.0, 1000.0, 500.0).unwrap();
    let screen = t.image_to_screen(Point::new(200.0, 100.0));
    assert!(point_approx_eq(screen, Point::new(100.0, 175.0)));
}

#[test]
fn image_to_screen_is_deterministic() {
    let t = ViewTransform::fit(640.0, 480.0, 1333.0, 977.0).unwrap();
    let p = Point::new(421.5, 83.25);
    assert_eq!(t.image_to_screen(p), t.image_to_screen(p));
}

#[test]
fn image_to_screen_out_of_bounds_is_not_clamped() {
    let t = ViewTransform::fit(500.0, 500.0, 1000.0, 500.0).unwrap();
    let screen = t.image_to_screen(Point::new(-100.0, 600.0));
    assert!(approx_eq(screen.x, -50.0));
    assert!(approx_eq(screen.y, 425.0));
}

// --- round trips ---

#[test]
fn round_trip_image_first() {
    let t = ViewTransform::fit(500.0, 500.0, 1000.0, 500.0).unwrap();
    let image = Point::new(733.0, 12.5);
    let back = t.screen_to_image(t.image_to_screen(image));
    assert!(point_approx_eq(image, back));
}

#[test]
fn round_trip_screen_first() {
    let t = ViewTransform::fit(977.0, 613.0, 2481.0, 1749.0).unwrap();
    let screen = Point::new(400.0, 300.0);
    let back = t.image_to_screen(t.screen_to_image(screen));
    assert!(point_approx_eq(screen, back));
}
