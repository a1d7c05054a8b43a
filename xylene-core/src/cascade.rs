use crate::coordinator::{LookupData, LookupLevel, LookupRequest};
use crate::model::{
    AreaId, AreaType, Building, BuildingId, Campus, CampusId, FloorFilter, LocationSelection,
    OutdoorArea, Zone, ZoneId,
};

/// One user action on the location cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CascadeAction {
    SelectCampus(CampusId),
    SelectAreaType(AreaType),
    SelectBuilding(BuildingId),
    SelectFloor(FloorFilter),
    SelectZone(ZoneId),
    SelectOutdoorArea(AreaId),
}

/// The option lists currently visible at each level of the cascade.
#[derive(Debug, Clone, Default)]
pub struct CascadeOptions {
    pub campuses: Vec<Campus>,
    pub buildings: Vec<Building>,
    pub outdoor_areas: Vec<OutdoorArea>,
    pub zones: Vec<Zone>,
}

impl CascadeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Floors selectable for the given building: `1..=floor_count`.
    pub fn available_floors(&self, building: &BuildingId) -> Vec<u32> {
        self.buildings
            .iter()
            .find(|b| &b.id == building)
            .map(|b| (1..=b.floor_count).collect())
            .unwrap_or_default()
    }

    /// Installs a freshly fetched list and reconciles the selection with it,
    /// so the selection never points at an option that is no longer visible.
    pub fn apply(&mut self, data: LookupData, selection: &mut LocationSelection) {
        match data {
            LookupData::Campuses(campuses) => {
                self.campuses = campuses;
            }
            LookupData::Buildings(buildings) => {
                self.buildings = buildings;
                if let Some(id) = &selection.building_id {
                    if !self.buildings.iter().any(|b| &b.id == id) {
                        selection.building_id = None;
                        selection.floor_filter = None;
                        selection.zone_id = None;
                    }
                }
            }
            LookupData::OutdoorAreas(areas) => {
                self.outdoor_areas = areas;
                if let Some(id) = &selection.outdoor_area_id {
                    if !self.outdoor_areas.iter().any(|a| &a.id == id) {
                        selection.outdoor_area_id = None;
                    }
                }
            }
            LookupData::Zones(zones) => {
                self.zones = zones;
                if let Some(id) = &selection.zone_id {
                    let member = self.zones.iter().any(|z| {
                        &z.id == id && Some(&z.building_id) == selection.building_id.as_ref()
                    });
                    if !member {
                        selection.zone_id = None;
                    }
                }
            }
        }
    }

    /// Empties one level's list after a failed lookup. Downstream controls
    /// have nothing to show until the lookup is re-issued.
    pub fn clear(&mut self, level: LookupLevel) {
        match level {
            LookupLevel::Campuses => self.campuses.clear(),
            LookupLevel::Buildings => self.buildings.clear(),
            LookupLevel::OutdoorAreas => self.outdoor_areas.clear(),
            LookupLevel::Zones => self.zones.clear(),
        }
    }
}

/// Applies one action to the selection and reports which lookups the
/// transition makes relevant.
///
/// Every transition's full reset set lives here: changing an ancestor always
/// clears every descendant field that is no longer guaranteed valid.
///
/// # Panics
///
/// Panics if the action's precondition is unmet (e.g. selecting a building
/// before an area type). The UI never exposes a control before its
/// precondition holds, so a violation is a programming error.
pub fn reduce(
    selection: &LocationSelection,
    options: &CascadeOptions,
    action: CascadeAction,
) -> (LocationSelection, Vec<LookupRequest>) {
    match action {
        CascadeAction::SelectCampus(campus_id) => {
            // A campus change invalidates the entire subtree.
            let next = LocationSelection {
                campus_id: Some(campus_id.clone()),
                ..LocationSelection::default()
            };
            let lookups = vec![
                LookupRequest::Buildings(campus_id.clone()),
                LookupRequest::OutdoorAreas(campus_id),
            ];
            (next, lookups)
        }
        CascadeAction::SelectAreaType(area_type) => {
            assert!(
                selection.campus_id.is_some(),
                "area type selected before campus"
            );
            assert_ne!(area_type, AreaType::Unset, "area type cannot be unset");
            let next = LocationSelection {
                campus_id: selection.campus_id.clone(),
                area_type,
                ..LocationSelection::default()
            };
            (next, Vec::new())
        }
        CascadeAction::SelectBuilding(building_id) => {
            assert_eq!(
                selection.area_type,
                AreaType::Building,
                "building selected outside the indoor branch"
            );
            let next = LocationSelection {
                building_id: Some(building_id.clone()),
                floor_filter: None,
                zone_id: None,
                ..selection.clone()
            };
            (next, vec![LookupRequest::Zones(building_id, None)])
        }
        CascadeAction::SelectFloor(filter) => {
            let building_id = selection
                .building_id
                .clone()
                .expect("floor filter set before building");
            if let FloorFilter::Floor(floor) = filter {
                assert!(
                    options.available_floors(&building_id).contains(&floor),
                    "floor {floor} is outside the building's floor range"
                );
            }
            // Keep the zone only if it stays visible under the new filter,
            // judged against the cached list; the refreshed server-side list
            // is reconciled again in CascadeOptions::apply.
            let zone_id = selection.zone_id.clone().filter(|id| {
                options
                    .zones
                    .iter()
                    .any(|z| &z.id == id && filter.admits(z))
            });
            let next = LocationSelection {
                floor_filter: Some(filter),
                zone_id,
                ..selection.clone()
            };
            (
                next,
                vec![LookupRequest::Zones(building_id, filter.as_floor())],
            )
        }
        CascadeAction::SelectZone(zone_id) => {
            let building_id = selection
                .building_id
                .as_ref()
                .expect("zone selected before building");
            // The zone must be a visible option AND belong to the selected
            // building: right after a building change the zones list still
            // holds the previous building's zones until the fresh fetch
            // lands.
            assert!(
                options
                    .zones
                    .iter()
                    .any(|z| z.id == zone_id && &z.building_id == building_id),
                "zone {zone_id} is not among the selected building's visible options"
            );
            let next = LocationSelection {
                zone_id: Some(zone_id),
                ..selection.clone()
            };
            (next, Vec::new())
        }
        CascadeAction::SelectOutdoorArea(area_id) => {
            assert_eq!(
                selection.area_type,
                AreaType::Outdoor,
                "outdoor area selected outside the outdoor branch"
            );
            assert!(
                options.outdoor_areas.iter().any(|a| a.id == area_id),
                "outdoor area {area_id} is not among the visible options"
            );
            let next = LocationSelection {
                outdoor_area_id: Some(area_id),
                ..selection.clone()
            };
            (next, Vec::new())
        }
    }
}
