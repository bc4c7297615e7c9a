use crate::models::Coordinates;
use serde::{Deserialize, Serialize};

/// A route as returned by the traffic-aware routing provider.
///
/// Every field defaults when absent; a missing summary reads as zero distance and time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficRoute {
    #[serde(default)]
    pub summary: TrafficSummary,
    #[serde(default)]
    pub legs: Vec<TrafficLeg>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficSummary {
    #[serde(default)]
    pub length_in_meters: f64,
    #[serde(default)]
    pub travel_time_in_seconds: u64,
    #[serde(default)]
    pub traffic_delay_in_seconds: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficLeg {
    #[serde(default)]
    pub points: Vec<Coordinates>,
}

impl TrafficRoute {
    /// All points across all legs, in leg order.
    pub fn flattened_points(&self) -> Vec<Coordinates> {
        self.legs
            .iter()
            .flat_map(|leg| leg.points.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_summary_defaults_to_zero() {
        let route: TrafficRoute = serde_json::from_value(json!({})).unwrap();
        assert_eq!(route.summary.length_in_meters, 0.0);
        assert_eq!(route.summary.travel_time_in_seconds, 0);
        assert_eq!(route.summary.traffic_delay_in_seconds, 0);
        assert!(route.flattened_points().is_empty());
    }

    #[test]
    fn test_flattens_legs_in_order() {
        let route: TrafficRoute = serde_json::from_value(json!({
            "summary": {"lengthInMeters": 12345, "travelTimeInSeconds": 5400},
            "legs": [
                {"points": [{"latitude": 1.0, "longitude": 2.0}, {"latitude": 3.0, "longitude": 4.0}]},
                {"points": [{"latitude": 5.0, "longitude": 6.0}]}
            ]
        }))
        .unwrap();

        assert_eq!(route.summary.length_in_meters, 12345.0);
        assert_eq!(route.summary.traffic_delay_in_seconds, 0);
        let latitudes: Vec<f64> = route.flattened_points().iter().map(|p| p.latitude).collect();
        assert_eq!(latitudes, vec![1.0, 3.0, 5.0]);
    }
}
