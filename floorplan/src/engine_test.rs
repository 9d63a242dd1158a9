use super::*;
use crate::scene::{DoorStatus, LockStatus};
use uuid::Uuid;

fn door(id: u128, name: &str) -> Door {
    Door {
        id: Uuid::from_u128(id),
        name: name.to_owned(),
        status: DoorStatus::Active,
        lock_status: Some(LockStatus::Open),
    }
}

fn ready_core() -> EngineCore {
    // 1000x500 plan in a 500x500 viewport: scale 0.5, offsets (0, 125).
    let mut core = EngineCore::new();
    core.set_viewport(500.0, 500.0, 1.0);
    core.set_image_size(1000.0, 500.0);
    core
}

// --- transform lifecycle ---

#[test]
fn transform_is_none_before_image_size_known() {
    let mut core = EngineCore::new();
    core.set_viewport(500.0, 500.0, 1.0);
    assert!(core.transform().is_none());
}

#[test]
fn transform_is_none_for_zero_viewport() {
    let mut core = EngineCore::new();
    core.set_image_size(1000.0, 500.0);
    core.set_viewport(0.0, 500.0, 1.0);
    assert!(core.transform().is_none());
}

#[test]
fn transform_matches_fit_scenario() {
    let core = ready_core();
    let t = core.transform().unwrap();
    assert!((t.scale - 0.5).abs() < 1e-10);
    assert!((t.offset_x - 0.0).abs() < 1e-10);
    assert!((t.offset_y - 125.0).abs() < 1e-10);
}

#[test]
fn transform_tracks_viewport_changes() {
    let mut core = ready_core();
    let before = core.transform().unwrap();
    core.set_viewport(1000.0, 1000.0, 1.0);
    let after = core.transform().unwrap();
    assert!((after.scale - 1.0).abs() < 1e-10);
    assert_ne!(before, after);
}

#[test]
fn dpr_is_clamped_to_at_least_one() {
    let mut core = EngineCore::new();
    core.set_viewport(500.0, 500.0, 0.0);
    assert!((core.dpr - 1.0).abs() < 1e-10);
    core.set_viewport(500.0, 500.0, 2.5);
    assert!((core.dpr - 2.5).abs() < 1e-10);
}

// --- selection via pointer ---

#[test]
fn pointer_down_on_marker_selects_door() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East")]);
    core.load_coordinates(Uuid::from_u128(1), vec![Coordinate::new(200.0, 100.0)]);

    // Marker (200, 100) draws at screen (100, 175).
    let action = core.on_pointer_down(Point::new(100.0, 175.0));
    assert_eq!(action, Action::SelectionChanged(Some(Uuid::from_u128(1))));
    assert_eq!(core.selection(), Some(Uuid::from_u128(1)));
}

#[test]
fn pointer_down_on_empty_space_clears_selection() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East")]);
    core.load_coordinates(Uuid::from_u128(1), vec![Coordinate::new(200.0, 100.0)]);

    core.on_pointer_down(Point::new(100.0, 175.0));
    let action = core.on_pointer_down(Point::new(400.0, 400.0));
    assert_eq!(action, Action::SelectionChanged(None));
    assert_eq!(core.selection(), None);
}

#[test]
fn pointer_down_on_already_selected_door_is_noop() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East")]);
    core.load_coordinates(Uuid::from_u128(1), vec![Coordinate::new(200.0, 100.0)]);

    core.on_pointer_down(Point::new(100.0, 175.0));
    let action = core.on_pointer_down(Point::new(101.0, 176.0));
    assert_eq!(action, Action::None);
    assert_eq!(core.selection(), Some(Uuid::from_u128(1)));
}

#[test]
fn pointer_down_on_empty_space_with_no_selection_is_noop() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East")]);
    let action = core.on_pointer_down(Point::new(10.0, 10.0));
    assert_eq!(action, Action::None);
}

#[test]
fn pointer_down_without_transform_is_noop() {
    let mut core = EngineCore::new();
    core.load_doors(vec![door(1, "Lobby East")]);
    core.load_coordinates(Uuid::from_u128(1), vec![Coordinate::new(200.0, 100.0)]);
    let action = core.on_pointer_down(Point::new(100.0, 175.0));
    assert_eq!(action, Action::None);
    assert_eq!(core.selection(), None);
}

#[test]
fn door_without_coordinates_draws_and_hits_nothing() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East"), door(2, "Vault")]);
    core.load_coordinates(Uuid::from_u128(1), vec![Coordinate::new(200.0, 100.0)]);

    // Door 2 has no coordinates (its fetch failed); door 1 is still usable.
    assert_eq!(core.scene.visible_markers().len(), 1);
    let action = core.on_pointer_down(Point::new(100.0, 175.0));
    assert_eq!(action, Action::SelectionChanged(Some(Uuid::from_u128(1))));
}

// --- data lifecycle ---

#[test]
fn reloading_doors_drops_stale_selection() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East")]);
    core.load_coordinates(Uuid::from_u128(1), vec![Coordinate::new(200.0, 100.0)]);
    core.on_pointer_down(Point::new(100.0, 175.0));

    core.load_doors(vec![door(2, "Vault")]);
    assert_eq!(core.selection(), None);
}

#[test]
fn reloading_doors_keeps_selection_when_door_survives() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East")]);
    core.load_coordinates(Uuid::from_u128(1), vec![Coordinate::new(200.0, 100.0)]);
    core.on_pointer_down(Point::new(100.0, 175.0));

    core.load_doors(vec![door(1, "Lobby East (renamed)")]);
    assert_eq!(core.selection(), Some(Uuid::from_u128(1)));
}

#[test]
fn clear_scene_resets_everything() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East")]);
    core.load_coordinates(Uuid::from_u128(1), vec![Coordinate::new(200.0, 100.0)]);
    core.on_pointer_down(Point::new(100.0, 175.0));

    core.clear_scene();
    assert!(core.scene.is_empty());
    assert_eq!(core.selection(), None);
    assert!(core.transform().is_none());
}

#[test]
fn door_lookup_resolves_loaded_doors() {
    let mut core = ready_core();
    core.load_doors(vec![door(1, "Lobby East")]);
    assert_eq!(core.door(&Uuid::from_u128(1)).map(|d| d.name.as_str()), Some("Lobby East"));
    assert!(core.door(&Uuid::from_u128(2)).is_none());
}
