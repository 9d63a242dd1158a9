//! Scene model: doors, marker coordinates, and the in-memory store.
//!
//! This module defines the data types that describe what is on the floor
//! plan (`Door`, `DoorStatus`, `LockStatus`, `Coordinate`) and the runtime
//! store that owns the live scene (`SceneStore`).
//!
//! Data flows into this layer from the network (JSON deserialization in the
//! host) and out to the renderer and hit-tester via `visible_markers`, which
//! yields markers in a deterministic order shared by both consumers.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{COLOR_ACTIVE_CLOSED, COLOR_ACTIVE_OPEN, COLOR_IDLE, COLOR_MAINTENANCE};
use crate::transform::Point;

/// Unique identifier for a door.
pub type DoorId = Uuid;

/// Administrative status of a door.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorStatus {
    /// Door is in service and reporting lock state.
    Active,
    /// Door is administratively disabled.
    Inactive,
    /// Door is undergoing maintenance.
    Maintenance,
}

/// Physical lock state, distinct from the administrative status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockStatus {
    Open,
    Closed,
}

/// A door as stored in the scene and on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    /// Unique identifier for this door.
    pub id: DoorId,
    /// Display name drawn next to each of the door's markers.
    pub name: String,
    /// Administrative status.
    pub status: DoorStatus,
    /// Current lock state; absent when the lock is not reporting.
    #[serde(default)]
    pub lock_status: Option<LockStatus>,
}

impl Door {
    /// Marker fill color by status precedence: maintenance beats lock state,
    /// then active doors split on open/closed, everything else is idle gray.
    #[must_use]
    pub fn marker_color(&self) -> &'static str {
        match (self.status, self.lock_status) {
            (DoorStatus::Maintenance, _) => COLOR_MAINTENANCE,
            (DoorStatus::Active, Some(LockStatus::Open)) => COLOR_ACTIVE_OPEN,
            (DoorStatus::Active, Some(LockStatus::Closed)) => COLOR_ACTIVE_CLOSED,
            _ => COLOR_IDLE,
        }
    }

    /// Whether this door's markers pulse. Cosmetic only; never part of hit
    /// geometry.
    #[must_use]
    pub fn pulses(&self) -> bool {
        self.status == DoorStatus::Active
    }
}

/// One access-point coordinate in floor-plan image space (pixels, origin
/// top-left). A door may carry zero, one, or several of these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coordinates with non-finite components are skipped rather than drawn.
    #[must_use]
    pub fn is_drawable(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn as_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A drawable marker: one door paired with one of its coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Marker<'a> {
    pub door: &'a Door,
    pub coordinate: Coordinate,
}

/// In-memory store of the doors and marker coordinates for one floor.
pub struct SceneStore {
    doors: HashMap<DoorId, Door>,
    coordinates: HashMap<DoorId, Vec<Coordinate>>,
}

impl SceneStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { doors: HashMap::new(), coordinates: HashMap::new() }
    }

    /// Replace the door set. Existing coordinate lists are kept; entries for
    /// doors no longer present simply stop being visible.
    pub fn load_doors(&mut self, doors: Vec<Door>) {
        self.doors.clear();
        for door in doors {
            self.doors.insert(door.id, door);
        }
    }

    /// Replace one door's coordinate list.
    pub fn load_coordinates(&mut self, door_id: DoorId, coordinates: Vec<Coordinate>) {
        self.coordinates.insert(door_id, coordinates);
    }

    /// Drop all doors and coordinates, e.g. when the floor selection changes.
    pub fn clear(&mut self) {
        self.doors.clear();
        self.coordinates.clear();
    }

    /// Look up a door by id.
    #[must_use]
    pub fn door(&self, id: &DoorId) -> Option<&Door> {
        self.doors.get(id)
    }

    /// Number of doors currently loaded.
    #[must_use]
    pub fn door_count(&self) -> usize {
        self.doors.len()
    }

    /// Number of drawable markers for one door. Zero when the door is absent
    /// or has no coordinate list.
    #[must_use]
    pub fn marker_count(&self, id: &DoorId) -> usize {
        if !self.doors.contains_key(id) {
            return 0;
        }
        self.coordinates
            .get(id)
            .map_or(0, |list| list.iter().filter(|c| c.is_drawable()).count())
    }

    /// All drawable markers in a deterministic order: doors sorted by id,
    /// then coordinates in list order.
    ///
    /// Coordinate entries whose door is not in the store are ignored (their
    /// status cannot be resolved), as are non-finite coordinates. The
    /// renderer and the hit-tester both iterate this exact sequence so a
    /// drawn marker is always the one a click resolves to.
    #[must_use]
    pub fn visible_markers(&self) -> Vec<Marker<'_>> {
        let mut door_ids: Vec<&DoorId> = self.doors.keys().collect();
        door_ids.sort();

        let mut markers = Vec::new();
        for id in door_ids {
            let Some(door) = self.doors.get(id) else {
                continue;
            };
            let Some(list) = self.coordinates.get(id) else {
                continue;
            };
            for coordinate in list.iter().filter(|c| c.is_drawable()) {
                markers.push(Marker { door, coordinate: *coordinate });
            }
        }
        markers
    }

    /// Returns `true` if the store holds no doors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new()
    }
}
