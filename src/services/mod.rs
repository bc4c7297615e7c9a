pub mod geocoding;
pub mod openweather;
pub mod route_enricher;
pub mod tomtom;
pub mod weather;

use crate::models::{Coordinates, TrafficRoute, WeatherSnapshot};
use async_trait::async_trait;

/// Outcome of a single upstream lookup.
///
/// Provider failures stop here: they are carried as data instead of
/// propagating as errors, and callers decide which sentinel to substitute.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    /// The provider answered but had nothing for this query.
    NotFound,
    /// The call itself failed (network, HTTP body, parse).
    Failed(String),
}

impl<T> Lookup<T> {
    pub fn from_result<E: std::fmt::Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(value)) => Lookup::Found(value),
            Ok(None) => Lookup::NotFound,
            Err(e) => Lookup::Failed(e.to_string()),
        }
    }
}

#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Traffic-aware alternatives between two points, in provider order.
    async fn calculate_routes(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
    ) -> Lookup<Vec<TrafficRoute>>;
}

#[async_trait]
pub trait GeocodingProvider: Send + Sync {
    /// Formatted address of the point.
    async fn location_name(&self, point: &Coordinates) -> Lookup<String>;
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions at the point, labelled with its address.
    async fn weather_at(&self, point: &Coordinates) -> Lookup<WeatherSnapshot>;
}
