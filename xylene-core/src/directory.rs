use async_trait::async_trait;
use serde::Deserialize;

use crate::error::DirectoryError;
use crate::model::{AreaId, Building, BuildingId, Campus, CampusId, OutdoorArea, Zone, ZoneId};

/// Read-only lookups over the campus location hierarchy.
///
/// Point lookups return `None` for referents that no longer exist; list
/// lookups return the full list for the given ancestor (the zone list is
/// filtered server-side when `floor` is given).
#[async_trait]
pub trait LocationDirectory: Send + Sync {
    async fn list_campuses(&self) -> Result<Vec<Campus>, DirectoryError>;

    async fn list_buildings(&self, campus: &CampusId) -> Result<Vec<Building>, DirectoryError>;

    async fn list_outdoor_areas(
        &self,
        campus: &CampusId,
    ) -> Result<Vec<OutdoorArea>, DirectoryError>;

    async fn list_zones(
        &self,
        building: &BuildingId,
        floor: Option<u32>,
    ) -> Result<Vec<Zone>, DirectoryError>;

    async fn get_zone(&self, zone: &ZoneId) -> Result<Option<Zone>, DirectoryError>;

    async fn get_building(&self, building: &BuildingId)
    -> Result<Option<Building>, DirectoryError>;

    async fn get_outdoor_area(&self, area: &AreaId)
    -> Result<Option<OutdoorArea>, DirectoryError>;
}

/// In-memory directory for tests and offline fixtures.
///
/// Deserializable so a TOML fixture file maps straight onto it (field names
/// inside the entity tables are camelCase, matching the wire types).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemoryDirectory {
    #[serde(default)]
    pub campuses: Vec<Campus>,
    #[serde(default)]
    pub buildings: Vec<Building>,
    #[serde(default)]
    pub outdoor_areas: Vec<OutdoorArea>,
    #[serde(default)]
    pub zones: Vec<Zone>,
}

impl MemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_campus(&mut self, campus: Campus) {
        self.campuses.push(campus);
    }

    pub fn add_building(&mut self, building: Building) {
        self.buildings.push(building);
    }

    pub fn add_outdoor_area(&mut self, area: OutdoorArea) {
        self.outdoor_areas.push(area);
    }

    pub fn add_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }
}

#[async_trait]
impl LocationDirectory for MemoryDirectory {
    async fn list_campuses(&self) -> Result<Vec<Campus>, DirectoryError> {
        Ok(self.campuses.clone())
    }

    async fn list_buildings(&self, campus: &CampusId) -> Result<Vec<Building>, DirectoryError> {
        Ok(self
            .buildings
            .iter()
            .filter(|b| &b.campus_id == campus)
            .cloned()
            .collect())
    }

    async fn list_outdoor_areas(
        &self,
        campus: &CampusId,
    ) -> Result<Vec<OutdoorArea>, DirectoryError> {
        Ok(self
            .outdoor_areas
            .iter()
            .filter(|a| &a.campus_id == campus)
            .cloned()
            .collect())
    }

    async fn list_zones(
        &self,
        building: &BuildingId,
        floor: Option<u32>,
    ) -> Result<Vec<Zone>, DirectoryError> {
        Ok(self
            .zones
            .iter()
            .filter(|z| &z.building_id == building)
            .filter(|z| floor.is_none() || z.floor_location == floor)
            .cloned()
            .collect())
    }

    async fn get_zone(&self, zone: &ZoneId) -> Result<Option<Zone>, DirectoryError> {
        Ok(self.zones.iter().find(|z| &z.id == zone).cloned())
    }

    async fn get_building(
        &self,
        building: &BuildingId,
    ) -> Result<Option<Building>, DirectoryError> {
        Ok(self.buildings.iter().find(|b| &b.id == building).cloned())
    }

    async fn get_outdoor_area(
        &self,
        area: &AreaId,
    ) -> Result<Option<OutdoorArea>, DirectoryError> {
        Ok(self.outdoor_areas.iter().find(|a| &a.id == area).cloned())
    }
}
