use serde::Deserialize;

/// Envelope the list endpoints return. The API reports a total alongside the
/// page, but the console consumes the lists whole.
#[derive(Debug, Deserialize)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use xylene_core::{Building, Zone};

    #[test]
    fn building_wire_shape_is_camel_case() {
        let json = r#"{
            "items": [
                { "id": "b-1", "campusId": "c-1", "name": "Main Hall", "floorCount": 4 }
            ],
            "total": 1
        }"#;
        let response: ListResponse<Building> = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].campus_id, "c-1");
        assert_eq!(response.items[0].floor_count, 4);
        assert_eq!(response.total, Some(1));
    }

    #[test]
    fn zone_floor_location_is_optional() {
        let json = r#"{ "id": "z-1", "buildingId": "b-1", "name": "Corridor" }"#;
        let zone: Zone = serde_json::from_str(json).unwrap();
        assert!(zone.floor_location.is_none());

        let json = r#"{ "id": "z-2", "buildingId": "b-1", "name": "Lab", "floorLocation": 2 }"#;
        let zone: Zone = serde_json::from_str(json).unwrap();
        assert_eq!(zone.floor_location, Some(2));
    }

    #[test]
    fn missing_total_defaults_to_none() {
        let json = r#"{ "items": [] }"#;
        let response: ListResponse<Zone> = serde_json::from_str(json).unwrap();
        assert!(response.items.is_empty());
        assert!(response.total.is_none());
    }
}
