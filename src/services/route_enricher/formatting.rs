//! Display renderings of route metrics.
//!
//! These are presentation strings only; the numeric fields travel alongside
//! them in [`RouteCandidate`](crate::models::RouteCandidate).

use crate::constants::NO_DELAY;
use crate::error::{AppError, Result};

/// Estimated CO2 in kg: fuel burned over the distance times the per-unit factor.
///
/// A zero `fuel_efficiency` is reported as a computation error rather than
/// producing an infinite or NaN estimate.
pub fn estimate_emissions_kg(
    distance_km: f64,
    fuel_efficiency: f64,
    emission_factor: f64,
) -> Result<f64> {
    if fuel_efficiency == 0.0 {
        return Err(AppError::Computation(
            "float division by zero: fuel_efficiency must be non-zero".to_string(),
        ));
    }
    Ok((distance_km / fuel_efficiency) * emission_factor)
}

/// "12.35 km"
pub fn format_distance(distance_km: f64) -> String {
    format!("{:.2} km", distance_km)
}

/// "1 hours 30 mins"; leftover seconds are dropped.
pub fn format_duration(duration_seconds: u64) -> String {
    format!(
        "{} hours {} mins",
        duration_seconds / 3600,
        duration_seconds % 3600 / 60
    )
}

/// "2 mins", or "No delay" when the provider reports zero.
pub fn format_traffic_delay(traffic_delay_seconds: u64) -> String {
    if traffic_delay_seconds > 0 {
        format!("{} mins", traffic_delay_seconds / 60)
    } else {
        NO_DELAY.to_string()
    }
}

/// "25.00 kg CO2"
pub fn format_emissions(emissions_kg: f64) -> String {
    format!("{:.2} kg CO2", emissions_kg)
}
