use serde::{Deserialize, Serialize};

/// Campus identifier
pub type CampusId = String;
/// Building identifier
pub type BuildingId = String;
/// Outdoor area identifier
pub type AreaId = String;
/// Zone (room) identifier
pub type ZoneId = String;

/// Root of the location hierarchy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campus {
    pub id: CampusId,
    pub name: String,
}

/// Indoor branch of a campus. Valid floors are `1..=floor_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: BuildingId,
    pub campus_id: CampusId,
    pub name: String,
    pub floor_count: u32,
}

/// Outdoor leaf, sibling to the Building/Zone branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutdoorArea {
    pub id: AreaId,
    pub campus_id: CampusId,
    pub name: String,
}

/// Room or space inside a building. `floor_location` may be unassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    pub id: ZoneId,
    pub building_id: BuildingId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor_location: Option<u32>,
}

/// The indoor/outdoor fork. A UI-facing choice, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AreaType {
    #[default]
    Unset,
    Outdoor,
    Building,
}

/// Narrows the zone list to one floor of a building. UI-only state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FloorFilter {
    All,
    Floor(u32),
}

impl FloorFilter {
    /// Whether a zone stays visible under this filter.
    ///
    /// `Floor(f)` admits only zones assigned to floor `f`; zones without a
    /// floor assignment are visible only under `All`.
    pub fn admits(&self, zone: &Zone) -> bool {
        match self {
            FloorFilter::All => true,
            FloorFilter::Floor(f) => zone.floor_location == Some(*f),
        }
    }

    /// The floor to request from the directory, if any.
    pub fn as_floor(&self) -> Option<u32> {
        match self {
            FloorFilter::All => None,
            FloorFilter::Floor(f) => Some(*f),
        }
    }
}

/// The transient selection path owned by one open asset dialog.
///
/// Mutated only through [`crate::cascade::reduce`], or replaced wholesale by
/// a [`crate::resolver::ResolvedPath`] snapshot in edit mode.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSelection {
    pub campus_id: Option<CampusId>,
    pub area_type: AreaType,
    pub building_id: Option<BuildingId>,
    pub floor_filter: Option<FloorFilter>,
    pub zone_id: Option<ZoneId>,
    pub outdoor_area_id: Option<AreaId>,
}

/// The leaf location an asset persists: at most one of zone/area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredLocation {
    Zone(ZoneId),
    Area(AreaId),
    Unassigned,
}

/// Partial asset payload produced at submit time.
///
/// Absent fields are omitted from the serialized form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<ZoneId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaId>,
}
