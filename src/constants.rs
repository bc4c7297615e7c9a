//! Stable application-wide constants.
//!
//! Values here are structural limits of the enrichment pipeline, the sentinel
//! strings substituted for missing upstream data, and default fallbacks for
//! env-var-based configuration.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Provider endpoints (overridable for proxies and local test doubles) ---

/// OpenWeather API root. The client appends `/data/2.5/weather`.
pub const OPEN_WEATHER_BASE_URL: &str = "https://api.openweathermap.org";
/// Google Maps API root. The client appends `/maps/api/geocode/json`.
pub const GOOGLE_GEOCODE_BASE_URL: &str = "https://maps.googleapis.com";
/// TomTom API root. The client appends `/routing/1/calculateRoute/...`.
pub const TOMTOM_ROUTING_BASE_URL: &str = "https://api.tomtom.com";

// --- Enrichment pipeline limits ---

/// Candidate routes kept from the routing provider, in provider order.
pub const MAX_ROUTE_CANDIDATES: usize = 3;
/// Every Nth point of a route's flattened polyline is sampled for lookups.
pub const POINT_SAMPLE_STRIDE: usize = 100;
/// Location names kept per route. The weather list is not truncated.
pub const MAX_SAMPLED_LOCATIONS: usize = 5;

// --- Sentinel values for missing or failed upstream data ---

/// Geocoder answered but had no address for the point.
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
/// Geocoder lookup failed outright.
pub const LOCATION_LOOKUP_FAILED: &str = "Error Fetching Location";
/// Weather provider answered without a description.
pub const UNKNOWN_WEATHER: &str = "Unknown";
/// Location placed in a weather snapshot whose lookup failed.
pub const WEATHER_LOOKUP_FAILED: &str = "Error";
/// Error envelope text when the routing provider has no routes.
pub const NO_TRAFFIC_DATA: &str = "No traffic data available";
/// Rendered traffic delay when the provider reports none.
pub const NO_DELAY: &str = "No delay";
