use std::sync::Arc;

use tokio::sync::mpsc;

use crate::cascade::CascadeOptions;
use crate::directory::LocationDirectory;
use crate::error::DirectoryError;
use crate::model::{Building, BuildingId, Campus, CampusId, LocationSelection, OutdoorArea, Zone};

/// One level of the cascade, each with its own option list and its own
/// stale-response guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupLevel {
    Campuses = 0,
    Buildings = 1,
    OutdoorAreas = 2,
    Zones = 3,
}

const LEVEL_COUNT: usize = 4;

impl LookupLevel {
    fn index(self) -> usize {
        self as usize
    }
}

/// A lookup the cascade wants issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    Campuses,
    Buildings(CampusId),
    OutdoorAreas(CampusId),
    Zones(BuildingId, Option<u32>),
}

impl LookupRequest {
    pub fn level(&self) -> LookupLevel {
        match self {
            LookupRequest::Campuses => LookupLevel::Campuses,
            LookupRequest::Buildings(_) => LookupLevel::Buildings,
            LookupRequest::OutdoorAreas(_) => LookupLevel::OutdoorAreas,
            LookupRequest::Zones(..) => LookupLevel::Zones,
        }
    }
}

/// A successfully fetched option list.
#[derive(Debug, Clone)]
pub enum LookupData {
    Campuses(Vec<Campus>),
    Buildings(Vec<Building>),
    OutdoorAreas(Vec<OutdoorArea>),
    Zones(Vec<Zone>),
}

/// A failed lookup, surfaced to the caller as a non-blocking notice.
/// Retrying is re-issuing the same request.
#[derive(Debug)]
pub struct LookupFailure {
    pub level: LookupLevel,
    pub error: DirectoryError,
}

#[derive(Debug)]
struct LookupOutcome {
    level: LookupLevel,
    seq: u64,
    result: Result<LookupData, DirectoryError>,
}

/// Issues the per-level lookups and feeds results back into the option
/// lists, discarding responses that were superseded before they resolved.
///
/// Each `issue` bumps a per-level sequence number that travels with the
/// spawned lookup; `poll` applies an outcome only if its sequence number is
/// still the latest issued for that level. In-flight requests are never
/// aborted, late results are simply ignored.
pub struct FetchCoordinator {
    directory: Arc<dyn LocationDirectory>,
    latest: [u64; LEVEL_COUNT],
    tx: mpsc::UnboundedSender<LookupOutcome>,
    rx: mpsc::UnboundedReceiver<LookupOutcome>,
}

impl FetchCoordinator {
    pub fn new(directory: Arc<dyn LocationDirectory>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            directory,
            latest: [0; LEVEL_COUNT],
            tx,
            rx,
        }
    }

    /// Spawns the lookup. Any previously issued request for the same level
    /// becomes stale immediately.
    pub fn issue(&mut self, request: LookupRequest) {
        let (level, seq) = self.begin(request.level());
        let directory = Arc::clone(&self.directory);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = run_lookup(directory.as_ref(), &request).await;
            // The receiver only goes away when the dialog closes.
            let _ = tx.send(LookupOutcome { level, seq, result });
        });
    }

    pub fn issue_all(&mut self, requests: impl IntoIterator<Item = LookupRequest>) {
        for request in requests {
            self.issue(request);
        }
    }

    fn begin(&mut self, level: LookupLevel) -> (LookupLevel, u64) {
        self.latest[level.index()] += 1;
        (level, self.latest[level.index()])
    }

    /// Drains resolved lookups without blocking, applying fresh lists and
    /// dropping stale ones. Returns the failures the caller should surface.
    pub fn poll(
        &mut self,
        options: &mut CascadeOptions,
        selection: &mut LocationSelection,
    ) -> Vec<LookupFailure> {
        let mut failures = Vec::new();
        while let Ok(outcome) = self.rx.try_recv() {
            if let Some(failure) = self.apply_outcome(outcome, options, selection) {
                failures.push(failure);
            }
        }
        failures
    }

    fn apply_outcome(
        &self,
        outcome: LookupOutcome,
        options: &mut CascadeOptions,
        selection: &mut LocationSelection,
    ) -> Option<LookupFailure> {
        if outcome.seq != self.latest[outcome.level.index()] {
            // Stale: a newer request for this level was issued meanwhile.
            return None;
        }
        match outcome.result {
            Ok(data) => {
                options.apply(data, selection);
                None
            }
            Err(error) => {
                options.clear(outcome.level);
                Some(LookupFailure {
                    level: outcome.level,
                    error,
                })
            }
        }
    }
}

async fn run_lookup(
    directory: &dyn LocationDirectory,
    request: &LookupRequest,
) -> Result<LookupData, DirectoryError> {
    match request {
        LookupRequest::Campuses => directory.list_campuses().await.map(LookupData::Campuses),
        LookupRequest::Buildings(campus) => directory
            .list_buildings(campus)
            .await
            .map(LookupData::Buildings),
        LookupRequest::OutdoorAreas(campus) => directory
            .list_outdoor_areas(campus)
            .await
            .map(LookupData::OutdoorAreas),
        LookupRequest::Zones(building, floor) => directory
            .list_zones(building, *floor)
            .await
            .map(LookupData::Zones),
    }
}
