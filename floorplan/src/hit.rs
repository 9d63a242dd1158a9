#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::MARKER_RADIUS_PX;
use crate::scene::{DoorId, SceneStore};
use crate::transform::{Point, ViewTransform};

/// Test which door (if any) is under the screen-space point `screen_pt`.
///
/// A marker is hit when the Euclidean distance from the pointer to its
/// screen position is within [`MARKER_RADIUS_PX`] — the drawn radius, not
/// the pulsing halo. When several markers overlap, the first match in
/// [`SceneStore::visible_markers`] order wins, which keeps the result
/// deterministic for a given scene.
#[must_use]
pub fn hit_test(screen_pt: Point, scene: &SceneStore, transform: ViewTransform) -> Option<DoorId> {
    for marker in scene.visible_markers() {
        let center = transform.image_to_screen(marker.coordinate.as_point());
        let dx = screen_pt.x - center.x;
        let dy = screen_pt.y - center.y;
        if (dx * dx + dy * dy).sqrt() <= MARKER_RADIUS_PX {
            return Some(marker.door.id);
        }
    }
    None
}
