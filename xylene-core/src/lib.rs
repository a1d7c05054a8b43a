//! Xylene is the hierarchical location-selection subsystem of the campus
//! asset console: Campus → Area Type → (Outdoor Area | Building → Floor →
//! Zone), with cascade resets, stale-lookup discarding, and reverse
//! resolution of a persisted leaf location.
//!
//! Core concepts:
//! - **LocationDirectory**: read-only async lookups over the hierarchy
//! - **reduce / CascadeAction**: the selection state machine; every
//!   transition's full reset set is defined in one place
//! - **FetchCoordinator**: issues per-level lookups and drops responses that
//!   were superseded before they resolved
//! - **resolve_location**: rebuilds the ancestor path of a stored zone/area
//!   as one snapshot, applied without replaying interactive actions
//! - **bind_location**: maps the finished path into the asset payload
//!
//! # Example
//!
//! ```
//! use xylene_core::{reduce, CascadeAction, CascadeOptions, LocationSelection};
//!
//! let options = CascadeOptions::new();
//! let selection = LocationSelection::default();
//!
//! // Picking a campus clears the whole subtree and asks for that campus's
//! // buildings and outdoor areas.
//! let (selection, lookups) = reduce(
//!     &selection,
//!     &options,
//!     CascadeAction::SelectCampus("c-north".to_string()),
//! );
//! assert_eq!(selection.campus_id.as_deref(), Some("c-north"));
//! assert_eq!(lookups.len(), 2);
//! ```

mod binder;
mod cascade;
mod coordinator;
mod directory;
mod error;
mod model;
mod resolver;

pub use binder::bind_location;
pub use cascade::{CascadeAction, CascadeOptions, reduce};
pub use coordinator::{FetchCoordinator, LookupData, LookupFailure, LookupLevel, LookupRequest};
pub use directory::{LocationDirectory, MemoryDirectory};
pub use error::{DirectoryError, ResolveError, ValidationError};
pub use model::{
    AreaId, AreaType, Building, BuildingId, Campus, CampusId, FloorFilter, LocationPayload,
    LocationSelection, OutdoorArea, StoredLocation, Zone, ZoneId,
};
pub use resolver::{ResolvedPath, resolve_location};
