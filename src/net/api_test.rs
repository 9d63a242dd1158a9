use super::*;

fn building() -> Uuid {
    Uuid::from_u128(0xB)
}

fn floor() -> Uuid {
    Uuid::from_u128(0xF)
}

#[test]
fn floor_endpoint_includes_both_ids() {
    let url = floor_endpoint(building(), floor());
    assert_eq!(
        url,
        "/api/buildings/00000000-0000-0000-0000-00000000000b/floors/00000000-0000-0000-0000-00000000000f"
    );
}

#[test]
fn doors_endpoint_nests_under_floor() {
    let url = doors_endpoint(building(), floor());
    assert!(url.starts_with("/api/buildings/"));
    assert!(url.ends_with("/doors"));
}

#[test]
fn coordinates_endpoint_nests_under_door() {
    let door = Uuid::from_u128(0xD);
    let url = door_coordinates_endpoint(building(), floor(), door);
    assert!(url.contains("/doors/00000000-0000-0000-0000-00000000000d/"));
    assert!(url.ends_with("/coordinates"));
}

#[test]
fn request_failed_message_names_resource_and_status() {
    assert_eq!(request_failed_message("floor", 404), "floor request failed: 404");
    assert_eq!(request_failed_message("doors", 500), "doors request failed: 500");
}
