//! Floor-view load state for the active floor selection.
//!
//! ARCHITECTURE
//! ============
//! This model is the local projection of one `(building, floor)` selection:
//! floor metadata, doors, per-door coordinates, and the image lifecycle.
//! All mutation goes through `apply_*` methods carrying a load generation,
//! so responses that arrive after the selection has changed are discarded
//! instead of corrupting the newer view.
//!
//! The floor and door fetches may resolve in either order; rendering
//! readiness is derived, not sequenced. Coordinate results are merged
//! per door so one failed lookup degrades that door only.

#[cfg(test)]
#[path = "floor_test.rs"]
mod floor_test;

use std::collections::HashMap;

use uuid::Uuid;

use crate::net::types::{Coordinate, Door, DoorId, Floor};

/// Lifecycle of the floor-plan background image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    /// No load attempted yet for this generation.
    #[default]
    Idle,
    /// An `<img>` load is in flight.
    Loading,
    /// The image decoded and was handed to the engine.
    Ready,
    /// The image failed to load; the floor renders as "no plan".
    Failed,
}

/// Load state for the active floor view.
#[derive(Clone, Debug, Default)]
pub struct FloorState {
    /// Building the current selection belongs to.
    pub building_id: Option<Uuid>,
    /// Floor currently selected.
    pub floor_id: Option<Uuid>,
    /// Load generation. Bumped by [`FloorState::begin_load`]; results tagged
    /// with an older generation are ignored.
    pub generation: u64,
    /// Monotonic change counter used by the canvas host to resync the
    /// engine scene exactly once per applied change.
    pub revision: u64,
    /// Floor metadata, once fetched.
    pub floor: Option<Floor>,
    /// Whether the floor fetch has resolved (successfully or not).
    pub floor_loaded: bool,
    /// Door list for the floor, once fetched.
    pub doors: Vec<Door>,
    /// Whether the doors fetch has resolved (successfully or not).
    pub doors_loaded: bool,
    /// Successfully fetched coordinate lists, keyed by door.
    pub coordinates: HashMap<DoorId, Vec<Coordinate>>,
    /// Doors whose coordinate fetch failed; they render without markers.
    pub coordinate_failures: Vec<DoorId>,
    /// Dismissible message for a failed floor or doors fetch.
    pub fetch_error: Option<String>,
    /// Sticky flag recording that a required fetch failed this generation,
    /// surviving banner dismissal so the page doesn't fall back to a
    /// loading placeholder forever.
    pub load_failed: bool,
    /// Background image lifecycle.
    pub image_status: ImageStatus,
}

impl FloorState {
    /// Reset for a new `(building, floor)` selection and return the new
    /// load generation to tag the in-flight fetches with.
    pub fn begin_load(&mut self, building_id: Uuid, floor_id: Uuid) -> u64 {
        self.building_id = Some(building_id);
        self.floor_id = Some(floor_id);
        self.generation += 1;
        self.revision += 1;
        self.floor = None;
        self.floor_loaded = false;
        self.doors.clear();
        self.doors_loaded = false;
        self.coordinates.clear();
        self.coordinate_failures.clear();
        self.fetch_error = None;
        self.load_failed = false;
        self.image_status = ImageStatus::Idle;
        self.generation
    }

    /// Whether `generation` is still the live load generation.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Record the floor fetch result. Stale generations are discarded.
    pub fn apply_floor(&mut self, generation: u64, result: Result<Floor, String>) {
        if !self.is_current(generation) {
            return;
        }
        self.floor_loaded = true;
        self.revision += 1;
        match result {
            Ok(floor) => self.floor = Some(floor),
            Err(message) => {
                self.fetch_error = Some(message);
                self.load_failed = true;
            }
        }
    }

    /// Record the doors fetch result. Stale generations are discarded.
    pub fn apply_doors(&mut self, generation: u64, result: Result<Vec<Door>, String>) {
        if !self.is_current(generation) {
            return;
        }
        self.doors_loaded = true;
        self.revision += 1;
        match result {
            Ok(doors) => self.doors = doors,
            Err(message) => {
                self.fetch_error = Some(message);
                self.load_failed = true;
            }
        }
    }

    /// Merge one door's coordinate fetch result. Failures degrade that door
    /// only: it is recorded and skipped, and never blocks the other doors.
    pub fn apply_coordinates(
        &mut self,
        generation: u64,
        door_id: DoorId,
        result: Result<Vec<Coordinate>, String>,
    ) {
        if !self.is_current(generation) {
            return;
        }
        self.revision += 1;
        match result {
            Ok(coordinates) => {
                self.coordinates.insert(door_id, coordinates);
            }
            Err(_) => self.coordinate_failures.push(door_id),
        }
    }

    /// Advance the image lifecycle. Stale generations are discarded.
    pub fn set_image_status(&mut self, generation: u64, status: ImageStatus) {
        if !self.is_current(generation) {
            return;
        }
        self.image_status = status;
        self.revision += 1;
    }

    /// Hide the fetch error banner. The failure itself stays recorded in
    /// `load_failed`; retry is owned by the surrounding page.
    pub fn dismiss_error(&mut self) {
        self.fetch_error = None;
    }

    /// Both required fetches have resolved successfully; drawing may begin.
    /// The fetches race freely, so this is derived from completion flags
    /// rather than from arrival order.
    #[must_use]
    pub fn data_ready(&self) -> bool {
        self.floor_loaded && self.doors_loaded && !self.load_failed
    }

    /// Whether this floor should show the "no floor plan" empty state: the
    /// floor resolved without a plan image, or its image failed to load.
    #[must_use]
    pub fn missing_plan(&self) -> bool {
        if self.image_status == ImageStatus::Failed {
            return true;
        }
        match &self.floor {
            Some(floor) => self.floor_loaded && !floor.has_plan(),
            None => false,
        }
    }

    /// Look up a door from the loaded list.
    #[must_use]
    pub fn door(&self, id: &DoorId) -> Option<&Door> {
        self.doors.iter().find(|door| door.id == *id)
    }

    /// Number of fetched coordinates for one door.
    #[must_use]
    pub fn marker_count(&self, id: &DoorId) -> usize {
        self.coordinates.get(id).map_or(0, Vec::len)
    }
}
