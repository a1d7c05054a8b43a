use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use xylene_core::{
    AreaId, Building, BuildingId, Campus, CampusId, DirectoryError, LocationDirectory,
    OutdoorArea, Zone, ZoneId,
};

use crate::error::DirectoryApiError;
use crate::types::ListResponse;

/// Client for the admin console's location API.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
}

impl DirectoryClient {
    /// Creates an unauthenticated client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_token: None,
        }
    }

    /// Creates a client that sends the token as a bearer credential.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_token: Some(token.into()),
        }
    }

    #[instrument(skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, DirectoryApiError> {
        debug!("Fetching from directory API");

        let mut request = self.http.get(format!("{}{}", self.base_url, path));
        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = body
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(DirectoryApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }

    /// Point lookup variant: a 404 means the referent was deleted.
    async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, DirectoryApiError> {
        match self.get_json(path).await {
            Ok(value) => Ok(Some(value)),
            Err(DirectoryApiError::Api { status: 404, .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn campuses(&self) -> Result<Vec<Campus>, DirectoryApiError> {
        let response: ListResponse<Campus> = self.get_json("/campuses").await?;
        Ok(response.items)
    }

    pub async fn buildings(&self, campus: &CampusId) -> Result<Vec<Building>, DirectoryApiError> {
        let response: ListResponse<Building> = self
            .get_json(&format!("/campuses/{}/buildings", campus))
            .await?;
        Ok(response.items)
    }

    pub async fn outdoor_areas(
        &self,
        campus: &CampusId,
    ) -> Result<Vec<OutdoorArea>, DirectoryApiError> {
        let response: ListResponse<OutdoorArea> = self
            .get_json(&format!("/campuses/{}/outdoor-areas", campus))
            .await?;
        Ok(response.items)
    }

    pub async fn zones(
        &self,
        building: &BuildingId,
        floor: Option<u32>,
    ) -> Result<Vec<Zone>, DirectoryApiError> {
        let path = match floor {
            Some(floor) => format!("/buildings/{}/zones?floor={}", building, floor),
            None => format!("/buildings/{}/zones", building),
        };
        let response: ListResponse<Zone> = self.get_json(&path).await?;
        Ok(response.items)
    }

    pub async fn zone(&self, zone: &ZoneId) -> Result<Option<Zone>, DirectoryApiError> {
        self.get_optional(&format!("/zones/{}", zone)).await
    }

    pub async fn building(
        &self,
        building: &BuildingId,
    ) -> Result<Option<Building>, DirectoryApiError> {
        self.get_optional(&format!("/buildings/{}", building)).await
    }

    pub async fn outdoor_area(
        &self,
        area: &AreaId,
    ) -> Result<Option<OutdoorArea>, DirectoryApiError> {
        self.get_optional(&format!("/outdoor-areas/{}", area)).await
    }
}

#[async_trait]
impl LocationDirectory for DirectoryClient {
    async fn list_campuses(&self) -> Result<Vec<Campus>, DirectoryError> {
        self.campuses().await.map_err(DirectoryError::from)
    }

    async fn list_buildings(&self, campus: &CampusId) -> Result<Vec<Building>, DirectoryError> {
        self.buildings(campus).await.map_err(DirectoryError::from)
    }

    async fn list_outdoor_areas(
        &self,
        campus: &CampusId,
    ) -> Result<Vec<OutdoorArea>, DirectoryError> {
        self.outdoor_areas(campus)
            .await
            .map_err(DirectoryError::from)
    }

    async fn list_zones(
        &self,
        building: &BuildingId,
        floor: Option<u32>,
    ) -> Result<Vec<Zone>, DirectoryError> {
        self.zones(building, floor)
            .await
            .map_err(DirectoryError::from)
    }

    async fn get_zone(&self, zone: &ZoneId) -> Result<Option<Zone>, DirectoryError> {
        self.zone(zone).await.map_err(DirectoryError::from)
    }

    async fn get_building(
        &self,
        building: &BuildingId,
    ) -> Result<Option<Building>, DirectoryError> {
        self.building(building).await.map_err(DirectoryError::from)
    }

    async fn get_outdoor_area(
        &self,
        area: &AreaId,
    ) -> Result<Option<OutdoorArea>, DirectoryError> {
        self.outdoor_area(area).await.map_err(DirectoryError::from)
    }
}
