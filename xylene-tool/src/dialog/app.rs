use std::sync::Arc;

use xylene_core::{
    AreaType, CascadeAction, CascadeOptions, FetchCoordinator, FloorFilter, LocationDirectory,
    LocationPayload, LocationSelection, LookupLevel, LookupRequest, StoredLocation, bind_location,
    reduce, resolve_location,
};

/// Which level of the cascade currently receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Campus,
    AreaType,
    Building,
    Floor,
    Leaf,
}

const FOCUS_ORDER: [Focus; 5] = [
    Focus::Campus,
    Focus::AreaType,
    Focus::Building,
    Focus::Floor,
    Focus::Leaf,
];

fn level_label(level: LookupLevel) -> &'static str {
    match level {
        LookupLevel::Campuses => "Campuses",
        LookupLevel::Buildings => "Buildings",
        LookupLevel::OutdoorAreas => "Outdoor areas",
        LookupLevel::Zones => "Zones",
    }
}

pub struct DialogApp {
    pub should_quit: bool,
    pub focus: Focus,
    pub cursor: usize,
    pub selection: LocationSelection,
    pub options: CascadeOptions,
    coordinator: FetchCoordinator,
    pub warnings: Vec<String>,
    pub submitted: Option<LocationPayload>,
}

impl DialogApp {
    /// Opens the dialog. In edit mode the stored leaf is resolved into a
    /// whole-state snapshot first; a deleted referent degrades to an empty
    /// selection with a warning instead of blocking the dialog.
    pub async fn open(directory: Arc<dyn LocationDirectory>, stored: StoredLocation) -> Self {
        let mut coordinator = FetchCoordinator::new(Arc::clone(&directory));
        let mut warnings = Vec::new();

        let selection = match resolve_location(directory.as_ref(), &stored).await {
            Ok(path) => {
                coordinator.issue_all(path.lookups);
                path.selection
            }
            Err(e) if e.is_missing_reference() => {
                warnings.push(format!(
                    "Previous location is no longer valid, pick a new one ({e})"
                ));
                LocationSelection::default()
            }
            Err(e) => {
                warnings.push(format!("Could not restore previous location: {e}"));
                LocationSelection::default()
            }
        };

        coordinator.issue(LookupRequest::Campuses);

        Self {
            should_quit: false,
            focus: Focus::Campus,
            cursor: 0,
            selection,
            options: CascadeOptions::new(),
            coordinator,
            warnings,
            submitted: None,
        }
    }

    /// Applies resolved lookups; called from the event loop between inputs.
    pub fn poll(&mut self) {
        for failure in self
            .coordinator
            .poll(&mut self.options, &mut self.selection)
        {
            self.warnings.push(format!(
                "{} lookup failed: {}",
                level_label(failure.level),
                failure.error
            ));
        }
    }

    /// A control is reachable only once its cascade precondition holds.
    pub fn focus_enabled(&self, focus: Focus) -> bool {
        match focus {
            Focus::Campus => true,
            Focus::AreaType => self.selection.campus_id.is_some(),
            Focus::Building => self.selection.area_type == AreaType::Building,
            Focus::Floor => {
                self.selection.area_type == AreaType::Building
                    && self.selection.building_id.is_some()
            }
            Focus::Leaf => match self.selection.area_type {
                AreaType::Building => self.selection.building_id.is_some(),
                AreaType::Outdoor => true,
                AreaType::Unset => false,
            },
        }
    }

    pub fn focus_next(&mut self) {
        self.cycle_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.cycle_focus(FOCUS_ORDER.len() - 1);
    }

    fn cycle_focus(&mut self, step: usize) {
        let mut idx = FOCUS_ORDER
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        for _ in 0..FOCUS_ORDER.len() {
            idx = (idx + step) % FOCUS_ORDER.len();
            if self.focus_enabled(FOCUS_ORDER[idx]) {
                self.focus = FOCUS_ORDER[idx];
                self.cursor = 0;
                return;
            }
        }
    }

    /// Floor choices for the focused building: "all floors" plus each floor.
    pub fn floor_choices(&self) -> Vec<FloorFilter> {
        let Some(building) = &self.selection.building_id else {
            return Vec::new();
        };
        let mut choices = vec![FloorFilter::All];
        choices.extend(
            self.options
                .available_floors(building)
                .into_iter()
                .map(FloorFilter::Floor),
        );
        choices
    }

    pub fn focused_len(&self) -> usize {
        match self.focus {
            Focus::Campus => self.options.campuses.len(),
            Focus::AreaType => 2,
            Focus::Building => self.options.buildings.len(),
            Focus::Floor => self.floor_choices().len(),
            Focus::Leaf => match self.selection.area_type {
                AreaType::Outdoor => self.options.outdoor_areas.len(),
                _ => self.options.zones.len(),
            },
        }
    }

    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.focused_len() {
            self.cursor += 1;
        }
    }

    /// Confirms the option under the cursor, running the cascade transition
    /// and issuing the lookups it makes relevant.
    pub fn activate(&mut self) {
        if !self.focus_enabled(self.focus) {
            return;
        }
        let len = self.focused_len();
        if len == 0 {
            return;
        }
        let idx = self.cursor.min(len - 1);

        let action = match self.focus {
            Focus::Campus => CascadeAction::SelectCampus(self.options.campuses[idx].id.clone()),
            Focus::AreaType => CascadeAction::SelectAreaType(if idx == 0 {
                AreaType::Building
            } else {
                AreaType::Outdoor
            }),
            Focus::Building => {
                CascadeAction::SelectBuilding(self.options.buildings[idx].id.clone())
            }
            Focus::Floor => CascadeAction::SelectFloor(self.floor_choices()[idx]),
            Focus::Leaf => match self.selection.area_type {
                AreaType::Outdoor => {
                    CascadeAction::SelectOutdoorArea(self.options.outdoor_areas[idx].id.clone())
                }
                _ => CascadeAction::SelectZone(self.options.zones[idx].id.clone()),
            },
        };

        let (next, lookups) = reduce(&self.selection, &self.options, action);
        self.selection = next;
        self.coordinator.issue_all(lookups);
    }

    /// Binds the terminal selection. A validation failure stays inline as a
    /// warning; success closes the dialog with the payload.
    pub fn submit(&mut self) {
        match bind_location(&self.selection) {
            Ok(payload) => {
                self.submitted = Some(payload);
                self.should_quit = true;
            }
            Err(e) => self.warnings.push(e.to_string()),
        }
    }
}
