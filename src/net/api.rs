//! REST API helpers for communicating with the access-management backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! into component state without crashing hydration. Nothing here retries;
//! refresh is owned by the surrounding page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use uuid::Uuid;

use super::types::{Coordinate, Door, Floor};

#[cfg(any(test, feature = "hydrate"))]
fn floor_endpoint(building_id: Uuid, floor_id: Uuid) -> String {
    format!("/api/buildings/{building_id}/floors/{floor_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn doors_endpoint(building_id: Uuid, floor_id: Uuid) -> String {
    format!("/api/buildings/{building_id}/floors/{floor_id}/doors")
}

#[cfg(any(test, feature = "hydrate"))]
fn door_coordinates_endpoint(building_id: Uuid, floor_id: Uuid, door_id: Uuid) -> String {
    format!("/api/buildings/{building_id}/floors/{floor_id}/doors/{door_id}/coordinates")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str, what: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message(what, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch one floor's metadata (name and plan image URL).
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_floor(building_id: Uuid, floor_id: Uuid) -> Result<Floor, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&floor_endpoint(building_id, floor_id), "floor").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (building_id, floor_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch the door list for one floor.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status.
pub async fn fetch_doors(building_id: Uuid, floor_id: Uuid) -> Result<Vec<Door>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&doors_endpoint(building_id, floor_id), "doors").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (building_id, floor_id);
        Err("not available on server".to_owned())
    }
}

/// Fetch one door's access-point coordinates in floor-plan pixel space.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server responds
/// with a non-OK status. A failure here is degraded per door by the caller,
/// never escalated to the whole floor view.
pub async fn fetch_door_coordinates(
    building_id: Uuid,
    floor_id: Uuid,
    door_id: Uuid,
) -> Result<Vec<Coordinate>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&door_coordinates_endpoint(building_id, floor_id, door_id), "coordinates").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (building_id, floor_id, door_id);
        Err("not available on server".to_owned())
    }
}
