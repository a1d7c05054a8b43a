use crate::coordinator::LookupRequest;
use crate::directory::LocationDirectory;
use crate::error::ResolveError;
use crate::model::{AreaType, FloorFilter, LocationSelection, StoredLocation};

/// A whole-state snapshot reconstructed from a persisted leaf location,
/// plus the lookups needed to populate the option lists around it.
///
/// The snapshot is applied to the dialog state in a single assignment.
/// Replaying it through the interactive actions would trigger each one's own
/// cascade reset and erase the values being restored.
#[derive(Debug, Clone)]
pub struct ResolvedPath {
    pub selection: LocationSelection,
    pub lookups: Vec<LookupRequest>,
}

impl ResolvedPath {
    fn empty() -> Self {
        Self {
            selection: LocationSelection::default(),
            lookups: Vec::new(),
        }
    }
}

/// Derives the full ancestor path of a stored leaf location.
///
/// A zone resolves through its building to the campus; an outdoor area
/// resolves directly to its campus. A referent deleted server-side yields a
/// `ResolveError` with [`ResolveError::is_missing_reference`] true; callers
/// fall back to the empty selection and warn instead of failing the dialog.
pub async fn resolve_location(
    directory: &dyn LocationDirectory,
    stored: &StoredLocation,
) -> Result<ResolvedPath, ResolveError> {
    match stored {
        StoredLocation::Unassigned => Ok(ResolvedPath::empty()),
        StoredLocation::Area(area_id) => {
            let area = directory
                .get_outdoor_area(area_id)
                .await?
                .ok_or_else(|| ResolveError::AreaNotFound(area_id.clone()))?;
            let selection = LocationSelection {
                campus_id: Some(area.campus_id.clone()),
                area_type: AreaType::Outdoor,
                outdoor_area_id: Some(area.id),
                ..LocationSelection::default()
            };
            let lookups = vec![
                LookupRequest::Buildings(area.campus_id.clone()),
                LookupRequest::OutdoorAreas(area.campus_id),
            ];
            Ok(ResolvedPath { selection, lookups })
        }
        StoredLocation::Zone(zone_id) => {
            let zone = directory
                .get_zone(zone_id)
                .await?
                .ok_or_else(|| ResolveError::ZoneNotFound(zone_id.clone()))?;
            let building = directory
                .get_building(&zone.building_id)
                .await?
                .ok_or_else(|| ResolveError::BuildingNotFound(zone.building_id.clone()))?;
            let floor_filter = zone
                .floor_location
                .map(FloorFilter::Floor)
                .unwrap_or(FloorFilter::All);
            let selection = LocationSelection {
                campus_id: Some(building.campus_id.clone()),
                area_type: AreaType::Building,
                building_id: Some(building.id.clone()),
                floor_filter: Some(floor_filter),
                zone_id: Some(zone.id),
                outdoor_area_id: None,
            };
            let lookups = vec![
                LookupRequest::Buildings(building.campus_id.clone()),
                LookupRequest::OutdoorAreas(building.campus_id),
                LookupRequest::Zones(building.id, floor_filter.as_floor()),
            ];
            Ok(ResolvedPath { selection, lookups })
        }
    }
}
