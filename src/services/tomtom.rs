use crate::error::{AppError, Result};
use crate::models::{Coordinates, TrafficRoute};
use crate::services::{Lookup, RoutingProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

const CALCULATE_ROUTE_PATH: &str = "/routing/1/calculateRoute";

/// Traffic-aware routing client for the TomTom Routing API.
#[derive(Clone)]
pub struct TomTomClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TomTomClient {
    pub fn new(client: Client, api_key: String, base_url: String) -> Self {
        TomTomClient {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn route_url(&self, origin: &Coordinates, destination: &Coordinates) -> String {
        format!(
            "{}{}/{}:{}/json",
            self.base_url,
            CALCULATE_ROUTE_PATH,
            origin.to_lat_lng(),
            destination.to_lat_lng()
        )
    }

    /// Routes between two points with live traffic.
    ///
    /// Any non-200 status is treated as "no data" and yields `None`, not an error.
    pub async fn calculate_route(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
    ) -> Result<Option<Vec<TrafficRoute>>> {
        let url = self.route_url(origin, destination);

        tracing::debug!(
            origin = %origin.to_lat_lng(),
            destination = %destination.to_lat_lng(),
            "TomTom route request"
        );

        let response = self
            .client
            .get(&url)
            .query(&[("traffic", "true"), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Routing request failed: {}", e)))?;

        if response.status() != StatusCode::OK {
            tracing::warn!(
                status = %response.status(),
                "TomTom returned HTTP {}; treating as no traffic data",
                response.status()
            );
            return Ok(None);
        }

        let calculated: CalculateRouteApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to parse routing response: {}", e)))?;

        tracing::debug!(
            routes = calculated.routes.len(),
            "TomTom response: {} routes",
            calculated.routes.len()
        );

        Ok(Some(calculated.routes))
    }
}

#[async_trait]
impl RoutingProvider for TomTomClient {
    async fn calculate_routes(
        &self,
        origin: &Coordinates,
        destination: &Coordinates,
    ) -> Lookup<Vec<TrafficRoute>> {
        Lookup::from_result(self.calculate_route(origin, destination).await)
    }
}

// TomTom API response types

#[derive(Debug, Deserialize)]
struct CalculateRouteApiResponse {
    #[serde(default)]
    routes: Vec<TrafficRoute>,
}
