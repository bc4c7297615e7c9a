use async_trait::async_trait;
use ecoroute::config::{ApiKeys, Config, ProviderEndpoints};
use ecoroute::models::{
    Coordinates, OptimizeRequest, TrafficLeg, TrafficRoute, TrafficSummary, WeatherSnapshot,
};
use ecoroute::services::route_enricher::RouteEnricher;
use ecoroute::services::{GeocodingProvider, Lookup, RoutingProvider, WeatherProvider};
use ecoroute::AppState;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Routing provider that always answers with the same lookup
#[allow(dead_code)]
pub struct StubRouting {
    pub response: Lookup<Vec<TrafficRoute>>,
}

#[async_trait]
impl RoutingProvider for StubRouting {
    async fn calculate_routes(
        &self,
        _origin: &Coordinates,
        _destination: &Coordinates,
    ) -> Lookup<Vec<TrafficRoute>> {
        self.response.clone()
    }
}

/// Geocoder naming each point by its latitude, or failing or finding nothing on every call
#[allow(dead_code)]
#[derive(Default)]
pub struct StubGeocoder {
    pub fail_with: Option<String>,
    pub not_found: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl GeocodingProvider for StubGeocoder {
    async fn location_name(&self, point: &Coordinates) -> Lookup<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(ref e) => Lookup::Failed(e.clone()),
            None if self.not_found => Lookup::NotFound,
            None => Lookup::Found(format!("Place {}", point.latitude)),
        }
    }
}

/// Weather provider reporting "clear sky" everywhere, or failing or finding nothing on every call
#[allow(dead_code)]
#[derive(Default)]
pub struct StubWeather {
    pub fail_with: Option<String>,
    pub not_found: bool,
    pub calls: AtomicUsize,
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn weather_at(&self, point: &Coordinates) -> Lookup<WeatherSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_with {
            Some(ref e) => Lookup::Failed(e.clone()),
            None if self.not_found => Lookup::NotFound,
            None => Lookup::Found(WeatherSnapshot::new(
                format!("Place {}", point.latitude),
                "clear sky",
            )),
        }
    }
}

/// Build a provider route whose points carry their own index as latitude
#[allow(dead_code)]
pub fn traffic_route(
    length_in_meters: f64,
    travel_time_in_seconds: u64,
    traffic_delay_in_seconds: u64,
    point_count: usize,
) -> TrafficRoute {
    let points = (0..point_count)
        .map(|i| Coordinates::new(i as f64, 80.0))
        .collect();

    TrafficRoute {
        summary: TrafficSummary {
            length_in_meters,
            travel_time_in_seconds,
            traffic_delay_in_seconds,
        },
        legs: vec![TrafficLeg { points }],
    }
}

#[allow(dead_code)]
pub fn optimize_request(fuel_efficiency: f64, emission_factor: f64) -> OptimizeRequest {
    OptimizeRequest {
        origin: Coordinates::new(13.0827, 80.2707),
        destination: Coordinates::new(12.9716, 77.5946),
        fuel_efficiency,
        emission_factor,
    }
}

#[allow(dead_code)]
pub fn stub_enricher(
    routes: Lookup<Vec<TrafficRoute>>,
    geocoder: Arc<StubGeocoder>,
    weather: Arc<StubWeather>,
) -> RouteEnricher {
    RouteEnricher::new(Arc::new(StubRouting { response: routes }), geocoder, weather)
}

#[allow(dead_code)]
pub fn test_api_keys() -> ApiKeys {
    ApiKeys {
        open_weather: "ow-test".to_string(),
        tomtom: "tt-test".to_string(),
        google: "g-test".to_string(),
    }
}

#[allow(dead_code)]
pub fn stub_state(routes: Lookup<Vec<TrafficRoute>>) -> Arc<AppState> {
    Arc::new(AppState {
        route_enricher: stub_enricher(
            routes,
            Arc::new(StubGeocoder::default()),
            Arc::new(StubWeather::default()),
        ),
        api_keys: test_api_keys(),
    })
}

/// Configuration pointing every provider at a local base URL
#[allow(dead_code)]
pub fn config_for(base_url: &str, api_keys: ApiKeys) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        api_keys,
        endpoints: ProviderEndpoints::all_at(base_url),
    }
}
