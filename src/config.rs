use crate::constants::*;
use std::env;

/// Credentials for the three upstream providers.
///
/// Keys are optional at startup: a missing key is stored empty and surfaces
/// as an authentication failure from the provider at call time.
#[derive(Debug, Clone, Default)]
pub struct ApiKeys {
    pub open_weather: String,
    pub tomtom: String,
    pub google: String,
}

impl ApiKeys {
    pub fn from_env() -> Self {
        ApiKeys {
            open_weather: optional_key("OPEN_WEATHER_API_KEY"),
            tomtom: optional_key("TOMTOM_API_KEY"),
            google: optional_key("GOOGLE_API_KEY"),
        }
    }
}

fn optional_key(name: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            tracing::warn!("{} is not set; provider calls will fail authentication", name);
            String::new()
        }
    }
}

/// Base URLs for the upstream providers.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub open_weather: String,
    pub google_geocode: String,
    pub tomtom_routing: String,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        ProviderEndpoints {
            open_weather: OPEN_WEATHER_BASE_URL.to_string(),
            google_geocode: GOOGLE_GEOCODE_BASE_URL.to_string(),
            tomtom_routing: TOMTOM_ROUTING_BASE_URL.to_string(),
        }
    }
}

impl ProviderEndpoints {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        ProviderEndpoints {
            open_weather: env::var("OPEN_WEATHER_BASE_URL").unwrap_or(defaults.open_weather),
            google_geocode: env::var("GOOGLE_GEOCODE_BASE_URL")
                .unwrap_or(defaults.google_geocode),
            tomtom_routing: env::var("TOMTOM_ROUTING_BASE_URL")
                .unwrap_or(defaults.tomtom_routing),
        }
    }

    /// Point every provider at the same root, e.g. a local test double.
    pub fn all_at(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        ProviderEndpoints {
            open_weather: base_url.clone(),
            google_geocode: base_url.clone(),
            tomtom_routing: base_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub api_keys: ApiKeys,
    pub endpoints: ProviderEndpoints,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        dotenv::dotenv().ok();

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .map_err(|_| "Invalid PORT")?,
            api_keys: ApiKeys::from_env(),
            endpoints: ProviderEndpoints::from_env(),
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
