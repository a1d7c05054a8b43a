//! End-to-end flows over the public API: interactive descent through the
//! cascade, edit-mode reconstruction, and out-of-order lookup responses.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use xylene_core::{
    AreaType, Building, BuildingId, Campus, CampusId, CascadeAction, CascadeOptions,
    DirectoryError, FetchCoordinator, FloorFilter, LocationDirectory, LocationSelection,
    LookupRequest, MemoryDirectory, OutdoorArea, StoredLocation, Zone, ZoneId, bind_location,
    reduce, resolve_location,
};

fn campus_a_fixture() -> MemoryDirectory {
    let mut dir = MemoryDirectory::new();
    dir.add_campus(Campus {
        id: "c-a".to_string(),
        name: "Campus A".to_string(),
    });
    dir.add_building(Building {
        id: "b-1".to_string(),
        campus_id: "c-a".to_string(),
        name: "B1".to_string(),
        floor_count: 3,
    });
    dir.add_outdoor_area(OutdoorArea {
        id: "a-1".to_string(),
        campus_id: "c-a".to_string(),
        name: "Quad".to_string(),
    });
    dir.add_zone(Zone {
        id: "z-1".to_string(),
        building_id: "b-1".to_string(),
        name: "Z1".to_string(),
        floor_location: Some(1),
    });
    dir.add_zone(Zone {
        id: "z-2".to_string(),
        building_id: "b-1".to_string(),
        name: "Z2".to_string(),
        floor_location: Some(2),
    });
    dir
}

/// Yields to let spawned lookups finish, then applies their outcomes.
async fn settle(
    coord: &mut FetchCoordinator,
    options: &mut CascadeOptions,
    selection: &mut LocationSelection,
) {
    for _ in 0..16 {
        tokio::task::yield_now().await;
        let failures = coord.poll(options, selection);
        assert!(failures.is_empty(), "unexpected lookup failure");
    }
}

#[tokio::test]
async fn descending_to_a_filtered_zone() {
    // Scenario A: Campus A -> Building branch -> B1 -> floor 2 shows Z2 only.
    let directory: Arc<dyn LocationDirectory> = Arc::new(campus_a_fixture());
    let mut coord = FetchCoordinator::new(Arc::clone(&directory));
    let mut options = CascadeOptions::new();
    let mut selection = LocationSelection::default();

    coord.issue(LookupRequest::Campuses);
    settle(&mut coord, &mut options, &mut selection).await;
    assert_eq!(options.campuses.len(), 1);

    let (next, lookups) = reduce(
        &selection,
        &options,
        CascadeAction::SelectCampus("c-a".to_string()),
    );
    selection = next;
    coord.issue_all(lookups);
    settle(&mut coord, &mut options, &mut selection).await;
    assert_eq!(options.buildings.len(), 1);
    assert_eq!(options.outdoor_areas.len(), 1);

    let (next, _) = reduce(
        &selection,
        &options,
        CascadeAction::SelectAreaType(AreaType::Building),
    );
    selection = next;

    let (next, lookups) = reduce(
        &selection,
        &options,
        CascadeAction::SelectBuilding("b-1".to_string()),
    );
    selection = next;
    coord.issue_all(lookups);
    settle(&mut coord, &mut options, &mut selection).await;
    assert_eq!(options.zones.len(), 2);
    assert_eq!(options.available_floors(&"b-1".to_string()), vec![1, 2, 3]);

    let (next, lookups) = reduce(
        &selection,
        &options,
        CascadeAction::SelectFloor(FloorFilter::Floor(2)),
    );
    selection = next;
    coord.issue_all(lookups);
    settle(&mut coord, &mut options, &mut selection).await;
    assert_eq!(options.zones.len(), 1);
    assert_eq!(options.zones[0].id, "z-2");

    let (next, _) = reduce(
        &selection,
        &options,
        CascadeAction::SelectZone("z-2".to_string()),
    );
    selection = next;

    // Scenario B: switching to the outdoor branch keeps only the campus.
    let (switched, _) = reduce(
        &selection,
        &options,
        CascadeAction::SelectAreaType(AreaType::Outdoor),
    );
    assert_eq!(switched.campus_id.as_deref(), Some("c-a"));
    assert_eq!(switched.area_type, AreaType::Outdoor);
    assert!(switched.building_id.is_none());
    assert!(switched.floor_filter.is_none());
    assert!(switched.zone_id.is_none());
    assert!(switched.outdoor_area_id.is_none());

    let payload = bind_location(&selection).unwrap();
    assert_eq!(payload.zone.as_deref(), Some("z-2"));
    assert!(payload.area.is_none());
}

#[tokio::test]
async fn edit_mode_reconstructs_the_path_without_interaction() {
    // Scenario C: an asset stored with zone z-2 reopens fully pre-selected.
    let dir = campus_a_fixture();
    let path = resolve_location(&dir, &StoredLocation::Zone("z-2".to_string()))
        .await
        .unwrap();

    assert_eq!(
        path.selection,
        LocationSelection {
            campus_id: Some("c-a".to_string()),
            area_type: AreaType::Building,
            building_id: Some("b-1".to_string()),
            floor_filter: Some(FloorFilter::Floor(2)),
            zone_id: Some("z-2".to_string()),
            outdoor_area_id: None,
        }
    );

    // Applying the snapshot and running its lookups leaves the selection
    // intact: the restored zone is a member of the fetched zone list.
    let directory: Arc<dyn LocationDirectory> = Arc::new(dir);
    let mut coord = FetchCoordinator::new(directory);
    let mut options = CascadeOptions::new();
    let mut selection = path.selection.clone();
    coord.issue_all(path.lookups);
    settle(&mut coord, &mut options, &mut selection).await;
    assert_eq!(selection, path.selection);
    assert_eq!(options.zones.len(), 1);
}

#[tokio::test]
async fn stored_zone_round_trips_through_the_payload() {
    let dir = campus_a_fixture();
    let stored = StoredLocation::Zone("z-2".to_string());
    let path = resolve_location(&dir, &stored).await.unwrap();
    let payload = bind_location(&path.selection).unwrap();
    assert_eq!(payload.zone.as_deref(), Some("z-2"));
    assert!(payload.area.is_none());

    let stored = StoredLocation::Area("a-1".to_string());
    let path = resolve_location(&dir, &stored).await.unwrap();
    let payload = bind_location(&path.selection).unwrap();
    assert_eq!(payload.area.as_deref(), Some("a-1"));
    assert!(payload.zone.is_none());
}

/// Directory whose building lookups block until the test opens a per-campus
/// gate, so response ordering can be forced.
struct GatedDirectory {
    inner: MemoryDirectory,
    gates: Mutex<HashMap<CampusId, Arc<Notify>>>,
}

impl GatedDirectory {
    fn new(inner: MemoryDirectory) -> Self {
        Self {
            inner,
            gates: Mutex::new(HashMap::new()),
        }
    }

    async fn gate(&self, campus: &str) -> Arc<Notify> {
        Arc::clone(
            self.gates
                .lock()
                .await
                .entry(campus.to_string())
                .or_default(),
        )
    }
}

#[async_trait]
impl LocationDirectory for GatedDirectory {
    async fn list_campuses(&self) -> Result<Vec<Campus>, DirectoryError> {
        self.inner.list_campuses().await
    }

    async fn list_buildings(&self, campus: &CampusId) -> Result<Vec<Building>, DirectoryError> {
        let gate = self.gate(campus).await;
        gate.notified().await;
        self.inner.list_buildings(campus).await
    }

    async fn list_outdoor_areas(
        &self,
        campus: &CampusId,
    ) -> Result<Vec<OutdoorArea>, DirectoryError> {
        self.inner.list_outdoor_areas(campus).await
    }

    async fn list_zones(
        &self,
        building: &BuildingId,
        floor: Option<u32>,
    ) -> Result<Vec<Zone>, DirectoryError> {
        self.inner.list_zones(building, floor).await
    }

    async fn get_zone(&self, zone: &ZoneId) -> Result<Option<Zone>, DirectoryError> {
        self.inner.get_zone(zone).await
    }

    async fn get_building(
        &self,
        building: &BuildingId,
    ) -> Result<Option<Building>, DirectoryError> {
        self.inner.get_building(building).await
    }

    async fn get_outdoor_area(
        &self,
        area: &xylene_core::AreaId,
    ) -> Result<Option<OutdoorArea>, DirectoryError> {
        self.inner.get_outdoor_area(area).await
    }
}

#[tokio::test]
async fn late_response_for_a_superseded_campus_is_ignored() {
    // Scenario D: select campus A, then campus B before A's buildings
    // resolve. A's late response must not overwrite B's list.
    let mut inner = MemoryDirectory::new();
    for campus in ["c-a", "c-b"] {
        inner.add_campus(Campus {
            id: campus.to_string(),
            name: campus.to_string(),
        });
        inner.add_building(Building {
            id: format!("{campus}-b1"),
            campus_id: campus.to_string(),
            name: "B1".to_string(),
            floor_count: 1,
        });
    }
    let directory = Arc::new(GatedDirectory::new(inner));
    let gate_a = directory.gate("c-a").await;
    let gate_b = directory.gate("c-b").await;

    let mut coord = FetchCoordinator::new(directory as Arc<dyn LocationDirectory>);
    let mut options = CascadeOptions::new();
    let mut selection = LocationSelection::default();

    let (next, lookups) = reduce(
        &selection,
        &options,
        CascadeAction::SelectCampus("c-a".to_string()),
    );
    selection = next;
    coord.issue_all(lookups);

    let (next, lookups) = reduce(
        &selection,
        &options,
        CascadeAction::SelectCampus("c-b".to_string()),
    );
    selection = next;
    coord.issue_all(lookups);

    // B's buildings arrive first.
    gate_b.notify_one();
    for _ in 0..64 {
        tokio::task::yield_now().await;
        coord.poll(&mut options, &mut selection);
        if !options.buildings.is_empty() {
            break;
        }
    }
    assert_eq!(options.buildings.len(), 1);
    assert_eq!(options.buildings[0].campus_id, "c-b");

    // A's buildings finally arrive and must be dropped.
    gate_a.notify_one();
    for _ in 0..64 {
        tokio::task::yield_now().await;
        coord.poll(&mut options, &mut selection);
    }
    assert_eq!(options.buildings.len(), 1);
    assert_eq!(options.buildings[0].campus_id, "c-b");
}
