#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

/// A point in either screen or floor-plan image space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fit-and-center transform from floor-plan image space to screen space.
///
/// `scale` is uniform on both axes so the plan is never stretched;
/// `offset_x` / `offset_y` center the scaled image inside the viewport.
/// All fields are in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl ViewTransform {
    /// Compute the transform that fits an `image_w` × `image_h` plan into a
    /// `viewport_w` × `viewport_h` surface, fully visible and centered.
    ///
    /// Returns `None` when either area is degenerate (zero, negative, or
    /// non-finite) so callers skip drawing instead of producing `NaN`
    /// coordinates. The transform is recomputed from scratch on every call;
    /// nothing is cached across viewport or image changes.
    #[must_use]
    pub fn fit(viewport_w: f64, viewport_h: f64, image_w: f64, image_h: f64) -> Option<Self> {
        let dims = [viewport_w, viewport_h, image_w, image_h];
        if dims.iter().any(|d| !d.is_finite() || *d <= 0.0) {
            return None;
        }

        let scale = (viewport_w / image_w).min(viewport_h / image_h);
        Some(Self {
            scale,
            offset_x: (viewport_w - image_w * scale) / 2.0,
            offset_y: (viewport_h - image_h * scale) / 2.0,
        })
    }

    /// Convert a floor-plan image-space point to screen coordinates.
    #[must_use]
    pub fn image_to_screen(&self, image: Point) -> Point {
        Point {
            x: self.offset_x + image.x * self.scale,
            y: self.offset_y + image.y * self.scale,
        }
    }

    /// Convert a screen-space point back to floor-plan image coordinates.
    #[must_use]
    pub fn screen_to_image(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset_x) / self.scale,
            y: (screen.y - self.offset_y) / self.scale,
        }
    }
}
