use thiserror::Error;

use crate::model::{AreaId, BuildingId, ZoneId};

/// Failure of one of the directory lookups.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Failure while reconstructing the ancestor path of a stored location.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("zone no longer exists: {0}")]
    ZoneNotFound(ZoneId),

    #[error("building no longer exists: {0}")]
    BuildingNotFound(BuildingId),

    #[error("outdoor area no longer exists: {0}")]
    AreaNotFound(AreaId),

    #[error("lookup failed: {0}")]
    Directory(#[from] DirectoryError),
}

impl ResolveError {
    /// True when the stored referent was deleted server-side. Callers degrade
    /// to an empty selection with a warning instead of failing the dialog.
    pub fn is_missing_reference(&self) -> bool {
        matches!(
            self,
            ResolveError::ZoneNotFound(_)
                | ResolveError::BuildingNotFound(_)
                | ResolveError::AreaNotFound(_)
        )
    }
}

/// Submit-time validation failure. Blocks submission, reported inline.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("an indoor location requires a zone selection")]
    MissingZone,

    #[error("an outdoor location requires an area selection")]
    MissingArea,
}
