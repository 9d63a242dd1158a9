use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::hit;
use crate::render;
use crate::scene::{Coordinate, Door, DoorId, SceneStore};
use crate::transform::{Point, ViewTransform};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    /// The selected door changed; `None` means the selection was cleared.
    SelectionChanged(Option<DoorId>),
}

/// Core engine state — all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser
/// dependencies.
pub struct EngineCore {
    pub scene: SceneStore,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    image_width: f64,
    image_height: f64,
    selected: Option<DoorId>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self {
            scene: SceneStore::new(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            image_width: 0.0,
            image_height: 0.0,
            selected: None,
        }
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Data inputs ---

    /// Replace the door set for the current floor.
    pub fn load_doors(&mut self, doors: Vec<Door>) {
        self.scene.load_doors(doors);
        if let Some(id) = self.selected
            && self.scene.door(&id).is_none()
        {
            self.selected = None;
        }
    }

    /// Replace one door's coordinate list.
    pub fn load_coordinates(&mut self, door_id: DoorId, coordinates: Vec<Coordinate>) {
        self.scene.load_coordinates(door_id, coordinates);
    }

    /// Drop the whole scene and selection, e.g. when the floor changes.
    pub fn clear_scene(&mut self) {
        self.scene.clear();
        self.selected = None;
        self.image_width = 0.0;
        self.image_height = 0.0;
    }

    // --- Viewport / image ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr.max(1.0);
    }

    /// Record the intrinsic pixel size of the loaded floor-plan image.
    pub fn set_image_size(&mut self, width: f64, height: f64) {
        self.image_width = width;
        self.image_height = height;
    }

    /// The current fit-and-center transform, recomputed from the live
    /// viewport and image sizes. `None` while either is degenerate, which
    /// tells callers to skip drawing and hit-testing.
    #[must_use]
    pub fn transform(&self) -> Option<ViewTransform> {
        ViewTransform::fit(
            self.viewport_width,
            self.viewport_height,
            self.image_width,
            self.image_height,
        )
    }

    // --- Input events ---

    /// Resolve a pointer-down at `screen_pt` (viewport-local CSS pixels).
    ///
    /// A marker hit selects its door; a miss clears the selection. Returns
    /// `Action::SelectionChanged` only when the selection actually moved.
    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Action {
        let Some(transform) = self.transform() else {
            return Action::None;
        };
        let hit = hit::hit_test(screen_pt, &self.scene, transform);
        if hit == self.selected {
            return Action::None;
        }
        self.selected = hit;
        Action::SelectionChanged(hit)
    }

    // --- Queries ---

    /// The currently selected door, if any.
    #[must_use]
    pub fn selection(&self) -> Option<DoorId> {
        self.selected
    }

    /// Look up a door by id.
    #[must_use]
    pub fn door(&self, id: &DoorId) -> Option<&Door> {
        self.scene.door(id)
    }
}

/// The full floor-plan engine. Wraps `EngineCore` and owns the browser
/// canvas element plus the loaded floor-plan image.
pub struct Engine {
    canvas: HtmlCanvasElement,
    image: Option<HtmlImageElement>,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, image: None, core: EngineCore::new() }
    }

    // --- Delegated data inputs ---

    pub fn load_doors(&mut self, doors: Vec<Door>) {
        self.core.load_doors(doors);
    }

    pub fn load_coordinates(&mut self, door_id: DoorId, coordinates: Vec<Coordinate>) {
        self.core.load_coordinates(door_id, coordinates);
    }

    /// Drop the scene and the background image, then blank the canvas so no
    /// stale frame lingers while the next floor loads.
    pub fn clear_scene(&mut self) {
        self.core.clear_scene();
        self.image = None;
        if let Ok(ctx) = self.context() {
            render::clear(&ctx, self.core.viewport_width, self.core.viewport_height, self.core.dpr);
        }
    }

    // --- Viewport / image ---

    /// Update viewport dimensions and device pixel ratio, resizing the
    /// canvas backing store to `css × dpr` physical pixels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        let backing_w = (width_css * self.core.dpr).round().max(0.0) as u32;
        let backing_h = (height_css * self.core.dpr).round().max(0.0) as u32;
        if self.canvas.width() != backing_w {
            self.canvas.set_width(backing_w);
        }
        if self.canvas.height() != backing_h {
            self.canvas.set_height(backing_h);
        }
    }

    /// Adopt a fully loaded floor-plan image as the render background.
    pub fn set_image(&mut self, image: HtmlImageElement) {
        self.core
            .set_image_size(f64::from(image.natural_width()), f64::from(image.natural_height()));
        self.image = Some(image);
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point) -> Action {
        self.core.on_pointer_down(screen_pt)
    }

    // --- Render ---

    /// Draw the current state to the canvas. `now_ms` is wall-clock time in
    /// milliseconds and drives the pulse phase.
    ///
    /// Without an image or with a degenerate viewport this blanks the canvas
    /// and returns `Ok` rather than drawing garbage.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
    pub fn render(&self, now_ms: f64) -> Result<(), JsValue> {
        let ctx = self.context()?;
        let (Some(image), Some(transform)) = (self.image.as_ref(), self.core.transform()) else {
            render::clear(&ctx, self.core.viewport_width, self.core.viewport_height, self.core.dpr);
            return Ok(());
        };
        render::draw(&ctx, &self.core, image, transform, now_ms)
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<DoorId> {
        self.core.selection()
    }

    #[must_use]
    pub fn door(&self, id: &DoorId) -> Option<&Door> {
        self.core.door(id)
    }

    fn context(&self) -> Result<CanvasRenderingContext2d, JsValue> {
        self.canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("context is not CanvasRenderingContext2d"))
    }
}
