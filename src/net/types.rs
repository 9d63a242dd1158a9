//! Wire types for the access-management REST API.
//!
//! Door and coordinate payloads deserialize straight into the `floorplan`
//! scene types, which are defined as wire-shaped; only floor metadata is
//! specific to this layer.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use floorplan::scene::{Coordinate, Door, DoorId, DoorStatus, LockStatus};

/// A floor as returned by the floor lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Floor {
    /// Unique identifier for this floor.
    pub id: Uuid,
    /// Display name, e.g. "Ground Floor".
    pub name: String,
    /// URL of the uploaded floor-plan raster; absent until one is uploaded.
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Floor {
    /// Whether this floor has a usable plan image to render against.
    #[must_use]
    pub fn has_plan(&self) -> bool {
        self.image_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}
