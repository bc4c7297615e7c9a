use crate::error::{AppError, Result};
use crate::models::Coordinates;
use crate::services::{GeocodingProvider, Lookup};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const GEOCODE_PATH: &str = "/maps/api/geocode/json";

/// Reverse geocoder backed by the Google Geocoding API.
#[derive(Clone)]
pub struct GoogleGeocodingClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GoogleGeocodingClient {
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        GoogleGeocodingClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Formatted address of the first result, or `None` when the API status
    /// is not `OK` or there are no results.
    pub async fn reverse_geocode(&self, point: &Coordinates) -> Result<Option<String>> {
        let url = format!("{}{}", self.base_url, GEOCODE_PATH);

        tracing::debug!(
            lat = point.latitude,
            lng = point.longitude,
            "Geocode request for {}",
            point.to_lat_lng()
        );

        let response = self
            .client
            .get(&url)
            .query(&[("latlng", point.to_lat_lng()), ("key", self.api_key.clone())])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Geocode request failed: {}", e)))?;

        let geocode: GeocodeApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse geocode response: {}", e)))?;

        if geocode.status != "OK" {
            tracing::debug!(status = %geocode.status, "Geocode returned no address");
            return Ok(None);
        }

        Ok(geocode
            .results
            .into_iter()
            .next()
            .map(|result| result.formatted_address))
    }
}

#[async_trait]
impl GeocodingProvider for GoogleGeocodingClient {
    async fn location_name(&self, point: &Coordinates) -> Lookup<String> {
        let lookup = Lookup::from_result(self.reverse_geocode(point).await);
        if let Lookup::Failed(ref e) = lookup {
            tracing::warn!(lat = point.latitude, lng = point.longitude, "{}", e);
        }
        lookup
    }
}

// Google API response types

#[derive(Debug, Deserialize)]
struct GeocodeApiResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    formatted_address: String,
}
