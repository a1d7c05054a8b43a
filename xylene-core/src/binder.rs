use crate::error::ValidationError;
use crate::model::{AreaType, LocationPayload, LocationSelection};

/// Maps the terminal selection to the asset's location payload.
///
/// The indoor branch requires a zone, the outdoor branch an area; an unset
/// area type produces an empty payload (no location fields sent). A missing
/// required leaf blocks submission and is reported to the surrounding form.
pub fn bind_location(selection: &LocationSelection) -> Result<LocationPayload, ValidationError> {
    match selection.area_type {
        AreaType::Building => match &selection.zone_id {
            Some(zone) => Ok(LocationPayload {
                zone: Some(zone.clone()),
                area: None,
            }),
            None => Err(ValidationError::MissingZone),
        },
        AreaType::Outdoor => match &selection.outdoor_area_id {
            Some(area) => Ok(LocationPayload {
                zone: None,
                area: Some(area.clone()),
            }),
            None => Err(ValidationError::MissingArea),
        },
        AreaType::Unset => Ok(LocationPayload::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indoor_selection_binds_zone_only() {
        let selection = LocationSelection {
            campus_id: Some("c-a".to_string()),
            area_type: AreaType::Building,
            building_id: Some("b-1".to_string()),
            zone_id: Some("z-2".to_string()),
            ..LocationSelection::default()
        };
        let payload = bind_location(&selection).unwrap();
        assert_eq!(payload.zone.as_deref(), Some("z-2"));
        assert!(payload.area.is_none());
    }

    #[test]
    fn outdoor_selection_binds_area_only() {
        let selection = LocationSelection {
            campus_id: Some("c-a".to_string()),
            area_type: AreaType::Outdoor,
            outdoor_area_id: Some("a-1".to_string()),
            ..LocationSelection::default()
        };
        let payload = bind_location(&selection).unwrap();
        assert!(payload.zone.is_none());
        assert_eq!(payload.area.as_deref(), Some("a-1"));
    }

    #[test]
    fn missing_zone_blocks_submission() {
        let selection = LocationSelection {
            campus_id: Some("c-a".to_string()),
            area_type: AreaType::Building,
            building_id: Some("b-1".to_string()),
            ..LocationSelection::default()
        };
        assert_eq!(bind_location(&selection), Err(ValidationError::MissingZone));
    }

    #[test]
    fn missing_area_blocks_submission() {
        let selection = LocationSelection {
            campus_id: Some("c-a".to_string()),
            area_type: AreaType::Outdoor,
            ..LocationSelection::default()
        };
        assert_eq!(bind_location(&selection), Err(ValidationError::MissingArea));
    }

    #[test]
    fn unset_area_type_sends_no_location_fields() {
        let payload = bind_location(&LocationSelection::default()).unwrap();
        assert_eq!(payload, LocationPayload::default());
    }
}
