use crate::constants::WEATHER_LOOKUP_FAILED;
use crate::models::Coordinates;
use serde::{de, Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub location: String,
    pub weather: String,
}

impl WeatherSnapshot {
    pub fn new(location: impl Into<String>, weather: impl Into<String>) -> Self {
        WeatherSnapshot {
            location: location.into(),
            weather: weather.into(),
        }
    }

    /// Snapshot substituted when a lookup failed; the failure text goes in `weather`.
    pub fn failed(reason: impl Into<String>) -> Self {
        WeatherSnapshot::new(WEATHER_LOOKUP_FAILED, reason)
    }
}

/// One enriched alternative route.
///
/// The string fields are display renderings of the raw numeric fields next to them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteCandidate {
    /// 1-based position in the provider's route list
    pub route_index: usize,
    pub distance: String,
    pub duration: String,
    pub traffic_delay: String,
    pub emissions: String,
    pub distance_km: f64,
    pub duration_seconds: u64,
    pub traffic_delay_seconds: u64,
    pub emissions_kg: f64,
    /// Names of sampled points, at most five
    pub traffic_locations: Vec<String>,
    /// Weather at every sampled point
    pub weather_data: Vec<WeatherSnapshot>,
    pub route_points: Vec<Coordinates>,
}

// Request/Response types for API endpoints

#[derive(Debug, Clone, Deserialize)]
pub struct OptimizeRequest {
    pub origin: Coordinates,
    pub destination: Coordinates,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub fuel_efficiency: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub emission_factor: f64,
}

impl OptimizeRequest {
    pub fn from_slice(body: &[u8]) -> Result<Self, String> {
        serde_json::from_slice(body).map_err(|e| e.to_string())
    }
}

/// Form inputs arrive as strings from the browser client, so both shapes are accepted.
fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            de::Error::custom(format!("could not convert string to float: '{}'", s))
        }),
    }
}

/// Body of a `POST /optimize` response: routes on success, an error otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptimizeResponse {
    Routes { routes: Vec<RouteCandidate> },
    Error { error: String },
}
