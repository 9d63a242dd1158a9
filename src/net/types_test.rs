use super::*;

#[test]
fn floor_deserializes_with_image_url() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-00000000000a",
        "name": "Ground Floor",
        "image_url": "/uploads/plans/ground.png"
    }"#;
    let floor: Floor = serde_json::from_str(json).unwrap();
    assert_eq!(floor.name, "Ground Floor");
    assert!(floor.has_plan());
}

#[test]
fn floor_deserializes_without_image_url() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-00000000000b",
        "name": "Mezzanine"
    }"#;
    let floor: Floor = serde_json::from_str(json).unwrap();
    assert_eq!(floor.image_url, None);
    assert!(!floor.has_plan());
}

#[test]
fn blank_image_url_counts_as_no_plan() {
    let floor = Floor {
        id: Uuid::from_u128(1),
        name: "Roof".to_owned(),
        image_url: Some("   ".to_owned()),
    };
    assert!(!floor.has_plan());
}

#[test]
fn door_wire_shape_matches_scene_type() {
    // Door payloads from the doors endpoint deserialize directly into the
    // scene type the engine consumes.
    let json = r#"[
        {"id": "00000000-0000-0000-0000-000000000001", "name": "Lobby East", "status": "active", "lock_status": "closed"},
        {"id": "00000000-0000-0000-0000-000000000002", "name": "Loading Dock", "status": "inactive"}
    ]"#;
    let doors: Vec<Door> = serde_json::from_str(json).unwrap();
    assert_eq!(doors.len(), 2);
    assert_eq!(doors[0].status, DoorStatus::Active);
    assert_eq!(doors[0].lock_status, Some(LockStatus::Closed));
    assert_eq!(doors[1].lock_status, None);
}

#[test]
fn coordinate_list_deserializes() {
    let json = r#"[{"x": 120.0, "y": 44.5}, {"x": 0.0, "y": 0.0}]"#;
    let coordinates: Vec<Coordinate> = serde_json::from_str(json).unwrap();
    assert_eq!(coordinates.len(), 2);
    assert_eq!(coordinates[0], Coordinate::new(120.0, 44.5));
}
