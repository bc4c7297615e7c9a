use serde::{Deserialize, Serialize};

/// A point on a route or a request endpoint.
///
/// Serialized as `{latitude, longitude}`, the shape the routing provider uses
/// for polyline points. Request bodies send `{lat, lng}`, accepted as aliases.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    #[serde(alias = "lat")]
    pub latitude: f64,
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinates {
            latitude,
            longitude,
        }
    }

    /// "lat,lng" as used in provider URL paths and geocode queries.
    pub fn to_lat_lng(&self) -> String {
        format!("{},{}", self.latitude, self.longitude)
    }
}
