use crate::constants::UNKNOWN_LOCATION;
use crate::models::{Coordinates, WeatherSnapshot};
use crate::services::geocoding::GoogleGeocodingClient;
use crate::services::openweather::OpenWeatherClient;
use crate::services::{Lookup, WeatherProvider};
use async_trait::async_trait;

/// Labels current weather with the geocoded address of the same point.
///
/// Makes two requests per point: weather first, then the geocoder. Either
/// failing fails the whole snapshot.
#[derive(Clone)]
pub struct WeatherReporter {
    weather: OpenWeatherClient,
    geocoder: GoogleGeocodingClient,
}

impl WeatherReporter {
    pub fn new(weather: OpenWeatherClient, geocoder: GoogleGeocodingClient) -> Self {
        WeatherReporter { weather, geocoder }
    }
}

#[async_trait]
impl WeatherProvider for WeatherReporter {
    async fn weather_at(&self, point: &Coordinates) -> Lookup<WeatherSnapshot> {
        let description = match self.weather.current_description(point).await {
            Ok(description) => description,
            Err(e) => {
                tracing::warn!(lat = point.latitude, lng = point.longitude, "{}", e);
                return Lookup::Failed(e.to_string());
            }
        };

        let location = match self.geocoder.reverse_geocode(point).await {
            Ok(Some(address)) => address,
            Ok(None) => UNKNOWN_LOCATION.to_string(),
            Err(e) => {
                tracing::warn!(lat = point.latitude, lng = point.longitude, "{}", e);
                return Lookup::Failed(e.to_string());
            }
        };

        Lookup::Found(WeatherSnapshot::new(location, description))
    }
}
