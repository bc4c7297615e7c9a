use crate::constants::UNKNOWN_WEATHER;
use crate::error::{AppError, Result};
use crate::models::Coordinates;
use reqwest::Client;
use serde::Deserialize;

const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

/// Current-conditions client for the OpenWeather API.
#[derive(Clone)]
pub struct OpenWeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        OpenWeatherClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Description of the current weather at a point, e.g. "light rain".
    ///
    /// Falls back to "Unknown" when the payload carries no description.
    /// An empty `weather` array is an error.
    pub async fn current_description(&self, point: &Coordinates) -> Result<String> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        tracing::debug!(
            lat = point.latitude,
            lng = point.longitude,
            "Weather request for {}",
            point.to_lat_lng()
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("lat", point.latitude.to_string()),
                ("lon", point.longitude.to_string()),
                ("appid", self.api_key.clone()),
                ("units", "metric".to_string()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Weather request failed: {}", e)))?;

        let current: CurrentWeatherApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse weather response: {}", e)))?;

        current.description()
    }
}

// OpenWeather API response types

#[derive(Debug, Deserialize)]
struct CurrentWeatherApiResponse {
    weather: Option<Vec<WeatherCondition>>,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    description: Option<String>,
}

impl CurrentWeatherApiResponse {
    fn description(self) -> Result<String> {
        let Some(conditions) = self.weather else {
            return Ok(UNKNOWN_WEATHER.to_string());
        };

        let first = conditions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Upstream("Weather response has no conditions".to_string()))?;

        Ok(first
            .description
            .unwrap_or_else(|| UNKNOWN_WEATHER.to_string()))
    }
}
