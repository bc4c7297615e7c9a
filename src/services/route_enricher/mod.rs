pub mod formatting;
pub mod sampling;

use crate::config::Config;
use crate::constants::*;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, OptimizeRequest, RouteCandidate, TrafficRoute, WeatherSnapshot};
use crate::services::geocoding::GoogleGeocodingClient;
use crate::services::openweather::OpenWeatherClient;
use crate::services::tomtom::TomTomClient;
use crate::services::weather::WeatherReporter;
use crate::services::{GeocodingProvider, Lookup, RoutingProvider, WeatherProvider};
use formatting::*;
use reqwest::Client;
use sampling::sample_points;
use std::sync::Arc;

/// Turns an origin/destination pair into up to three enriched route candidates.
///
/// All provider calls run one after another. Lookup failures along a route
/// degrade to sentinel values; only a routing failure or a computation error
/// aborts the request.
pub struct RouteEnricher {
    routing: Arc<dyn RoutingProvider>,
    geocoder: Arc<dyn GeocodingProvider>,
    weather: Arc<dyn WeatherProvider>,
}

impl RouteEnricher {
    pub fn new(
        routing: Arc<dyn RoutingProvider>,
        geocoder: Arc<dyn GeocodingProvider>,
        weather: Arc<dyn WeatherProvider>,
    ) -> Self {
        RouteEnricher {
            routing,
            geocoder,
            weather,
        }
    }

    /// Wire the HTTP provider clients from configuration, sharing one connection pool.
    pub fn from_config(config: &Config) -> Self {
        let client = Client::new();
        let keys = &config.api_keys;
        let endpoints = &config.endpoints;

        let geocoder = GoogleGeocodingClient::new(
            client.clone(),
            keys.google.clone(),
            endpoints.google_geocode.clone(),
        );
        let weather = WeatherReporter::new(
            OpenWeatherClient::new(
                client.clone(),
                keys.open_weather.clone(),
                endpoints.open_weather.clone(),
            ),
            geocoder.clone(),
        );
        let routing = TomTomClient::new(
            client,
            keys.tomtom.clone(),
            endpoints.tomtom_routing.clone(),
        );

        RouteEnricher::new(Arc::new(routing), Arc::new(geocoder), Arc::new(weather))
    }

    pub async fn optimize(&self, request: &OptimizeRequest) -> Result<Vec<RouteCandidate>> {
        let routes = match self
            .routing
            .calculate_routes(&request.origin, &request.destination)
            .await
        {
            Lookup::Found(routes) => routes,
            Lookup::NotFound => Vec::new(),
            Lookup::Failed(e) => return Err(AppError::Upstream(e)),
        };

        if routes.is_empty() {
            return Err(AppError::NoTrafficData);
        }

        tracing::debug!(
            provider_routes = routes.len(),
            "Enriching {} of {} provider routes",
            routes.len().min(MAX_ROUTE_CANDIDATES),
            routes.len()
        );

        let mut candidates = Vec::with_capacity(MAX_ROUTE_CANDIDATES);
        for (idx, route) in routes.iter().take(MAX_ROUTE_CANDIDATES).enumerate() {
            candidates.push(self.enrich_route(idx + 1, route, request).await?);
        }

        Ok(candidates)
    }

    async fn enrich_route(
        &self,
        route_index: usize,
        route: &TrafficRoute,
        request: &OptimizeRequest,
    ) -> Result<RouteCandidate> {
        let distance_km = route.summary.length_in_meters / 1000.0;
        let duration_seconds = route.summary.travel_time_in_seconds;
        let traffic_delay_seconds = route.summary.traffic_delay_in_seconds;
        let emissions_kg =
            estimate_emissions_kg(distance_km, request.fuel_efficiency, request.emission_factor)?;

        let route_points = route.flattened_points();
        let sampled = sample_points(&route_points, POINT_SAMPLE_STRIDE);

        let mut traffic_locations = Vec::with_capacity(sampled.len());
        for point in &sampled {
            traffic_locations.push(self.location_name(point).await);
        }

        let mut weather_data = Vec::with_capacity(sampled.len());
        for point in &sampled {
            weather_data.push(self.weather_snapshot(point).await);
        }

        // Only the location list is capped; every weather snapshot is kept.
        traffic_locations.truncate(MAX_SAMPLED_LOCATIONS);

        tracing::debug!(
            route_index,
            points = route_points.len(),
            sampled = sampled.len(),
            "Route {}: {:.2}km, {} points, {} sampled",
            route_index,
            distance_km,
            route_points.len(),
            sampled.len()
        );

        Ok(RouteCandidate {
            route_index,
            distance: format_distance(distance_km),
            duration: format_duration(duration_seconds),
            traffic_delay: format_traffic_delay(traffic_delay_seconds),
            emissions: format_emissions(emissions_kg),
            distance_km,
            duration_seconds,
            traffic_delay_seconds,
            emissions_kg,
            traffic_locations,
            weather_data,
            route_points,
        })
    }

    async fn location_name(&self, point: &Coordinates) -> String {
        match self.geocoder.location_name(point).await {
            Lookup::Found(name) => name,
            Lookup::NotFound => UNKNOWN_LOCATION.to_string(),
            Lookup::Failed(_) => LOCATION_LOOKUP_FAILED.to_string(),
        }
    }

    async fn weather_snapshot(&self, point: &Coordinates) -> WeatherSnapshot {
        match self.weather.weather_at(point).await {
            Lookup::Found(snapshot) => snapshot,
            // WeatherReporter never answers NotFound; other providers may have no data
            Lookup::NotFound => WeatherSnapshot::new(UNKNOWN_LOCATION, UNKNOWN_WEATHER),
            Lookup::Failed(e) => WeatherSnapshot::failed(e),
        }
    }
}
