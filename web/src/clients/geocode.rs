//! Reverse geocoding through Nominatim (OpenStreetMap), no API key required.

use serde::Deserialize;
use shared_types::Coordinate;

use crate::errors::GeocodeError;

pub const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
pub const UNKNOWN_PLACE: &str = "Unknown";

#[derive(Debug, Deserialize)]
struct NominatimResponse {
    address: Option<NominatimAddress>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
pub struct NominatimAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
}

/// City, then town, then village. Blank names are skipped.
pub fn resolve_place_name(address: &NominatimAddress) -> String {
    [&address.city, &address.town, &address.village]
        .into_iter()
        .flatten()
        .find(|name| !name.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| UNKNOWN_PLACE.to_string())
}

#[allow(async_fn_in_trait)]
pub trait ReverseGeocoder {
    async fn place_name(&self, coordinate: Coordinate) -> Result<String, GeocodeError>;
}

#[derive(Clone, Debug)]
pub struct NominatimClient {
    client: reqwest::Client,
    base_url: String,
}

impl Default for NominatimClient {
    fn default() -> Self {
        Self::with_base_url(NOMINATIM_URL)
    }
}

impl NominatimClient {
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ReverseGeocoder for NominatimClient {
    async fn place_name(&self, coordinate: Coordinate) -> Result<String, GeocodeError> {
        let response = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("lat", coordinate.lat.to_string()),
                ("lon", coordinate.lng.to_string()),
                ("format", "json".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let body: NominatimResponse = response.json().await?;
        let address = body.address.ok_or(GeocodeError::NoAddress)?;
        Ok(resolve_place_name(&address))
    }
}
