//! Shared numeric and color constants for the floorplan crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Drawn marker radius in screen pixels. Also the hit-test radius; the
/// pulsing halo never participates in hit geometry.
pub const MARKER_RADIUS_PX: f64 = 8.0;

// ── Pulse halo ──────────────────────────────────────────────────

/// Halo base radius offset beyond the marker radius, in screen pixels.
pub const HALO_BASE_OFFSET_PX: f64 = 5.0;

/// Halo radius oscillation amplitude in screen pixels.
pub const HALO_AMPLITUDE_PX: f64 = 3.0;

/// Full pulse period in milliseconds.
pub const HALO_PERIOD_MS: f64 = 1260.0;

/// Halo fill opacity.
pub const HALO_ALPHA: f64 = 0.25;

// ── Labels ──────────────────────────────────────────────────────

/// Gap between the marker edge and the label plate, in screen pixels.
pub const LABEL_GAP_PX: f64 = 6.0;

/// Horizontal padding inside the label plate, in screen pixels.
pub const LABEL_PAD_X_PX: f64 = 4.0;

/// Label font size in screen pixels.
pub const LABEL_FONT_PX: f64 = 12.0;

// ── Colors ──────────────────────────────────────────────────────

/// Marker fill for doors under maintenance.
pub const COLOR_MAINTENANCE: &str = "#E0A422";

/// Marker fill for active doors with an open lock.
pub const COLOR_ACTIVE_OPEN: &str = "#2E9E4F";

/// Marker fill for active doors with a closed lock.
pub const COLOR_ACTIVE_CLOSED: &str = "#D94B4B";

/// Marker fill for inactive doors or doors with unknown lock status.
pub const COLOR_IDLE: &str = "#9AA0A6";

/// Stroke color for the selected door's highlight ring.
pub const COLOR_SELECTION: &str = "#1E90FF";

/// Label text color.
pub const COLOR_LABEL_INK: &str = "#1F1A17";

/// Opaque label plate fill.
pub const COLOR_LABEL_PLATE: &str = "#FFFFFF";
